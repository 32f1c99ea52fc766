use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// Starter vocabulary for the administrator-managed lookup tables.
/// Seeding is idempotent at the table level: a non-empty governorates
/// table means the vocabularies were already loaded.
pub async fn seed_lookups(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM governorates")
        .fetch_one(db)
        .await?;

    if existing > 0 {
        println!("Lookup tables already seeded, nothing to do");
        return Ok(());
    }

    let mut tx = db.begin().await?;

    let governorates = [
        ("Cairo", "القاهرة", vec![("Cairo", "القاهرة"), ("New Cairo", "القاهرة الجديدة")]),
        ("Giza", "الجيزة", vec![("Giza", "الجيزة"), ("6th of October", "السادس من أكتوبر")]),
        ("Alexandria", "الإسكندرية", vec![("Alexandria", "الإسكندرية")]),
        ("Dakahlia", "الدقهلية", vec![("Mansoura", "المنصورة")]),
        ("Sharqia", "الشرقية", vec![("Zagazig", "الزقازيق")]),
    ];

    for (name_en, name_ar, cities) in governorates {
        let governorate_id = insert_named(&mut tx, "governorates", name_en, name_ar).await?;
        for (city_en, city_ar) in cities {
            sqlx::query(
                "INSERT INTO cities (governorate_id, name_en, name_ar) VALUES ($1, $2, $3)",
            )
            .bind(governorate_id)
            .bind(city_en)
            .bind(city_ar)
            .execute(&mut *tx)
            .await?;
        }
    }

    for (name_en, name_ar) in [
        ("Public", "حكومية"),
        ("Private", "خاصة"),
        ("International", "دولية"),
    ] {
        insert_named(&mut tx, "institute_categories", name_en, name_ar).await?;
    }

    for (name_en, name_ar) in [
        ("Institution", "مؤسسة"),
        ("Legislator", "جهة تشريعية"),
        ("Administrator", "مسؤول"),
    ] {
        insert_named(&mut tx, "account_types", name_en, name_ar).await?;
    }

    for (name_en, name_ar) in [
        ("University", "جامعة"),
        ("College", "كلية"),
        ("Institute", "معهد"),
        ("Vocational", "مهني"),
    ] {
        insert_named(&mut tx, "institution_types", name_en, name_ar).await?;
    }

    for (status_en, status_ar) in [
        ("Accredited", "معتمدة"),
        ("Pending Review", "قيد المراجعة"),
        ("Expired", "منتهية"),
        ("Revoked", "ملغاة"),
    ] {
        sqlx::query("INSERT INTO accreditation_statuses (status_en, status_ar) VALUES ($1, $2)")
            .bind(status_en)
            .bind(status_ar)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    println!("Lookup tables seeded");

    Ok(())
}

/// Remove all lookup rows. Fails if any are referenced by institutions or
/// users; clearing is meant for resetting a fresh environment.
pub async fn clear_lookups(db: &PgPool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    for table in [
        "cities",
        "governorates",
        "institute_categories",
        "account_types",
        "institution_types",
        "accreditation_statuses",
    ] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    println!("Lookup tables cleared");

    Ok(())
}

async fn insert_named(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    name_en: &str,
    name_ar: &str,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    let (id,): (Uuid,) = sqlx::query_as(&format!(
        "INSERT INTO {} (name_en, name_ar) VALUES ($1, $2) RETURNING id",
        table
    ))
    .bind(name_en)
    .bind(name_ar)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id)
}
