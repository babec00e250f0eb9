use fleet_api::domain::entities::{NewVehicle, Page};
use fleet_api::domain::repositories::VehicleRepository;
use fleet_api::error::AppError;
use fleet_api::infrastructure::persistence::PgVehicleRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn fusca() -> NewVehicle {
    NewVehicle {
        name: "Fusca".to_string(),
        brand: "VW".to_string(),
        year: 1980,
    }
}

#[sqlx::test]
async fn test_create_and_find(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    let created = repo.create(fusca()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Fusca");

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);
}

#[sqlx::test]
async fn test_year_check_constraint(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    let result = repo
        .create(NewVehicle {
            year: 1899,
            ..fusca()
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[sqlx::test]
async fn test_update(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    let mut vehicle = repo.create(fusca()).await.unwrap();
    vehicle.overwrite(NewVehicle {
        name: "Brasilia".to_string(),
        brand: "Volkswagen".to_string(),
        year: 1976,
    });

    let updated = repo.update(vehicle.clone()).await.unwrap();
    assert_eq!(updated, vehicle);

    let found = repo.find_by_id(vehicle.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Brasilia");
}

#[sqlx::test]
async fn test_update_missing(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    let mut vehicle = repo.create(fusca()).await.unwrap();
    vehicle.id += 1000;

    let result = repo.update(vehicle).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_delete(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    let vehicle = repo.create(fusca()).await.unwrap();

    repo.delete(vehicle.id).await.unwrap();

    assert!(repo.find_by_id(vehicle.id).await.unwrap().is_none());
    assert!(matches!(
        repo.delete(vehicle.id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test]
async fn test_list_pages(pool: PgPool) {
    let repo = PgVehicleRepository::new(Arc::new(pool));

    for i in 0..12 {
        repo.create(NewVehicle {
            name: format!("Vehicle {i}"),
            ..fusca()
        })
        .await
        .unwrap();
    }

    assert_eq!(repo.list(None).await.unwrap().len(), 12);

    let second = repo.list(Page::new(2)).await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "Vehicle 10");

    assert!(repo.list(Page::new(3)).await.unwrap().is_empty());
}
