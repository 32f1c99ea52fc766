use sqlx::PgPool;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::modules::legislators::model::Legislator;
use crate::utils::errors::AppError;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::generate_token;

use super::model::{LoginRequest, LoginResponse, RegisterLegislatorDto, User};

pub struct AuthService;

impl AuthService {
    /// Register a legislator account: user, legislator profile and bearer
    /// token are created in one transaction, so a failure at any step
    /// leaves no partial account behind.
    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn register_legislator(
        db: &PgPool,
        dto: RegisterLegislatorDto,
    ) -> Result<(Legislator, String), AppError> {
        if dto.password != dto.password_confirmation {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "password: Password fields didn't match"
            )));
        }

        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await?;

        if existing.is_some() {
            warn!(email = %dto.email, "Registration attempt with existing email");
            return Err(AppError::bad_request(anyhow::anyhow!(
                "email: Email already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let mut tx = db.begin().await?;

        // Email doubles as the login username.
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, name_en, name_ar)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, username, email, name_en, name_ar,
                       institution_id, account_type_id, created_at, updated_at",
        )
        .bind(&dto.email)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .fetch_one(&mut *tx)
        .await?;

        let legislator = sqlx::query_as::<_, Legislator>(
            "INSERT INTO legislators (
                 user_id, name_en, name_ar, email,
                 location_branch_name_en, location_branch_name_ar,
                 primary_contact_name, website, country, governorate, city,
                 phone, landline, publicly_listed
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING id, user_id, name_en, name_ar, email,
                       location_branch_name_en, location_branch_name_ar,
                       primary_contact_name, website, country, governorate, city,
                       phone, landline, publicly_listed, created_at, updated_at",
        )
        .bind(user.id)
        .bind(&dto.name_en)
        .bind(&dto.name_ar)
        .bind(&dto.email)
        .bind(&dto.location_branch_name_en)
        .bind(&dto.location_branch_name_ar)
        .bind(&dto.primary_contact_name)
        .bind(&dto.website)
        .bind(&dto.country)
        .bind(&dto.governorate)
        .bind(&dto.city)
        .bind(&dto.phone)
        .bind(&dto.landline)
        .bind(dto.publicly_listed)
        .fetch_one(&mut *tx)
        .await?;

        let token = generate_token();
        sqlx::query("INSERT INTO auth_tokens (token, user_id) VALUES ($1, $2)")
            .bind(&token)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            legislator.id = %legislator.id,
            user.id = %user.id,
            "Legislator registered"
        );

        Ok((legislator, token))
    }

    #[instrument(skip(db, dto), fields(email = %dto.email))]
    pub async fn login_user(db: &PgPool, dto: LoginRequest) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: Uuid,
            username: String,
            email: String,
            name_en: String,
            name_ar: String,
            institution_id: Option<Uuid>,
            account_type_id: Option<Uuid>,
            created_at: chrono::DateTime<chrono::Utc>,
            updated_at: chrono::DateTime<chrono::Utc>,
            password: String,
        }

        let row = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, email, name_en, name_ar, institution_id,
                    account_type_id, created_at, updated_at, password
             FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &row.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = Self::get_or_create_token(db, row.id).await?;

        Ok(LoginResponse {
            token,
            user: User {
                id: row.id,
                username: row.username,
                email: row.email,
                name_en: row.name_en,
                name_ar: row.name_ar,
                institution_id: row.institution_id,
                account_type_id: row.account_type_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        })
    }

    /// Tokens never expire, so login reuses an existing one when present.
    async fn get_or_create_token(db: &PgPool, user_id: Uuid) -> Result<String, AppError> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT token FROM auth_tokens WHERE user_id = $1 LIMIT 1")
                .bind(user_id)
                .fetch_optional(db)
                .await?;

        if let Some((token,)) = existing {
            return Ok(token);
        }

        let token = generate_token();
        sqlx::query("INSERT INTO auth_tokens (token, user_id) VALUES ($1, $2)")
            .bind(&token)
            .bind(user_id)
            .execute(db)
            .await?;

        Ok(token)
    }
}
