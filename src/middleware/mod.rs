//! Request extractors for authentication and the legislator capability.
//!
//! # Authentication flow
//!
//! 1. Client sends `Authorization: Bearer <token>` where the token is the
//!    opaque string issued at registration or login
//! 2. [`auth::AuthUser`] resolves the token against the `auth_tokens` table
//! 3. [`auth::CurrentLegislator`] additionally resolves the caller's
//!    legislator record, rejecting plain users with 403
//! 4. Handler executes with the authenticated identity in scope

pub mod auth;
