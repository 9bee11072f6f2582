use drink_order_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    dto::{drinks::CreateDrinkRequest, users::CreateUserRequest},
    entity::{Drinks, Users, drinks, users},
    error::AppError,
    services::{drink_service, user_service},
    state::AppState,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 1).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;
    let state = AppState::new(pool);

    let user_id = ensure_user(&state, "user@example.com", "user123").await?;
    seed_drinks(&state).await?;

    println!("Seed completed. User ID: {user_id}");
    Ok(())
}

async fn ensure_user(state: &AppState, email: &str, password: &str) -> anyhow::Result<i32> {
    let payload = CreateUserRequest {
        email: email.to_string(),
        password: password.to_string(),
        profile: Some("Seeded demo account".to_string()),
    };

    let user_id = match user_service::create_user(state, payload).await {
        Ok(user) => user.id,
        Err(AppError::Conflict(_)) => {
            let existing = Users::find()
                .filter(users::Column::Email.eq(email))
                .one(&state.orm)
                .await?
                .ok_or_else(|| anyhow::anyhow!("user {email} vanished during seeding"))?;
            existing.id
        }
        Err(err) => return Err(anyhow::anyhow!(err.to_string())),
    };

    println!("Ensured user {email}");
    Ok(user_id)
}

async fn seed_drinks(state: &AppState) -> anyhow::Result<()> {
    let drinks = vec![
        ("Latte", "Espresso with steamed milk", "coffee", 4.5),
        ("Americano", "Espresso topped with hot water", "coffee", 3.0),
        ("Matcha Latte", "Stone-ground green tea with milk", "tea", 5.0),
        ("Lemonade", "Fresh squeezed, lightly sweetened", "cold", 3.5),
    ];

    for (name, description, category, price) in drinks {
        let exists = Drinks::find()
            .filter(drinks::Column::Name.eq(name))
            .one(&state.orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        drink_service::create_drink(
            state,
            CreateDrinkRequest {
                name: name.to_string(),
                description: Some(description.to_string()),
                image: None,
                category: Some(category.to_string()),
                price,
            },
        )
        .await
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;
    }

    println!("Seeded drinks");
    Ok(())
}
