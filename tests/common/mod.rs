use chrono::NaiveDate;
use mizan::config::cors::CorsConfig;
use mizan::config::server::ServerConfig;
use mizan::router::init_router;
use mizan::state::AppState;
use mizan::utils::password::hash_password;
use mizan::utils::token::generate_token;
#[allow(unused_imports)]
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

pub async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        cors_config: CorsConfig::from_env(),
        server_config: ServerConfig::from_env(),
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub token: String,
}

#[allow(dead_code)]
pub struct TestLegislator {
    pub id: Uuid,
    pub user: TestUser,
}

/// Plain account with a usable bearer token but no legislator record.
#[allow(dead_code)]
pub async fn create_test_user(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO users (username, email, password, name_en, name_ar)
         VALUES ($1, $1, $2, $3, $4)
         RETURNING id",
    )
    .bind(email)
    .bind(&hashed)
    .bind("Test User")
    .bind("مستخدم تجريبي")
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let token = generate_token();
    sqlx::query("INSERT INTO auth_tokens (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(id)
        .execute(&mut **tx)
        .await
        .unwrap();

    TestUser {
        id,
        email: email.to_string(),
        password: password.to_string(),
        token,
    }
}

/// Account plus linked legislator profile, the capability every criteria
/// endpoint requires.
#[allow(dead_code)]
pub async fn create_test_legislator(
    tx: &mut Transaction<'_, Postgres>,
    email: &str,
    password: &str,
) -> TestLegislator {
    let user = create_test_user(tx, email, password).await;

    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO legislators (
             user_id, name_en, name_ar, email,
             location_branch_name_en, location_branch_name_ar,
             primary_contact_name, website, country, governorate, city,
             phone, landline, publicly_listed
         )
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, TRUE)
         RETURNING id",
    )
    .bind(user.id)
    .bind("Test Authority")
    .bind("هيئة تجريبية")
    .bind(email)
    .bind("Main Branch")
    .bind("الفرع الرئيسي")
    .bind("Test Contact")
    .bind("http://authority.example.com")
    .bind("Egypt")
    .bind("Cairo")
    .bind("Cairo")
    .bind("+201000000000")
    .bind("+20233333333")
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    TestLegislator { id, user }
}

#[allow(dead_code)]
pub struct LookupFixture {
    pub governorate_id: Uuid,
    pub city_id: Uuid,
    pub institute_category_id: Uuid,
    pub account_type_id: Uuid,
    pub institution_type_id: Uuid,
    pub accreditation_status_id: Uuid,
}

/// The lookup rows an institution needs to reference.
#[allow(dead_code)]
pub async fn create_lookup_fixture(tx: &mut Transaction<'_, Postgres>) -> LookupFixture {
    let (governorate_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO governorates (name_en, name_ar) VALUES ('Cairo', 'القاهرة') RETURNING id",
    )
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let (city_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO cities (governorate_id, name_en, name_ar)
         VALUES ($1, 'Cairo', 'القاهرة') RETURNING id",
    )
    .bind(governorate_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let (institute_category_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO institute_categories (name_en, name_ar)
         VALUES ('Public', 'حكومية') RETURNING id",
    )
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let (account_type_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO account_types (name_en, name_ar)
         VALUES ('Institution', 'مؤسسة') RETURNING id",
    )
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let (institution_type_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO institution_types (name_en, name_ar)
         VALUES ('University', 'جامعة') RETURNING id",
    )
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    let (accreditation_status_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO accreditation_statuses (status_en, status_ar)
         VALUES ('Accredited', 'معتمدة') RETURNING id",
    )
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    LookupFixture {
        governorate_id,
        city_id,
        institute_category_id,
        account_type_id,
        institution_type_id,
        accreditation_status_id,
    }
}

#[allow(dead_code)]
pub async fn create_test_institution(
    tx: &mut Transaction<'_, Postgres>,
    name: &str,
    lookups: &LookupFixture,
) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO institutions (
             name_en, name_ar, url, ministry_listed, accreditation_expiry_date,
             institute_category_id, account_type_id, institution_type_id,
             accreditation_status_id, city_id
         )
         VALUES ($1, $2, $3, TRUE, $4, $5, $6, $7, $8, $9)
         RETURNING id",
    )
    .bind(name)
    .bind(name)
    .bind("http://institution.example.com")
    .bind(NaiveDate::from_ymd_opt(2030, 6, 30).unwrap())
    .bind(lookups.institute_category_id)
    .bind(lookups.account_type_id)
    .bind(lookups.institution_type_id)
    .bind(lookups.accreditation_status_id)
    .bind(lookups.city_id)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    id
}

#[allow(dead_code)]
pub async fn create_test_faculty(
    tx: &mut Transaction<'_, Postgres>,
    institution_id: Uuid,
    name_en: &str,
) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO faculties (institution_id, name_en, name_ar, website_url)
         VALUES ($1, $2, $3, 'http://faculty.example.com')
         RETURNING id",
    )
    .bind(institution_id)
    .bind(name_en)
    .bind(name_en)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    id
}

#[allow(dead_code)]
pub async fn create_test_major(
    tx: &mut Transaction<'_, Postgres>,
    faculty_id: Uuid,
    name_en: &str,
) -> Uuid {
    let (id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO majors (faculty_id, name_en, name_ar)
         VALUES ($1, $2, $3)
         RETURNING id",
    )
    .bind(faculty_id)
    .bind(name_en)
    .bind(name_en)
    .fetch_one(&mut **tx)
    .await
    .unwrap();

    id
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}
