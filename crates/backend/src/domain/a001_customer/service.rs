use super::repository;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, Measurements};
use uuid::Uuid;

/// Создание нового клиента
pub async fn create(dto: CustomerDto) -> anyhow::Result<Uuid> {
    let mut aggregate = Customer::new_for_insert(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

/// Обновление существующего клиента
pub async fn update(dto: CustomerDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);
    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

/// Мягкое удаление клиента
pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Customer>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    repository::list_all().await
}

/// Вставка тестовых данных
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = vec![
        CustomerDto {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone_number: "+2348000000000".into(),
            gender: "female".into(),
            address: "12 Main St".into(),
            age: Some(30),
            customer_description: "likes florals, wants a \"bubu\" gown".into(),
            measurements: Measurements {
                bust: Some(34.0),
                waist: Some(28.0),
                hip: Some(36.0),
                shoulder: Some(15.0),
                bustpoint: Some(10.0),
                shoulder_to_underbust: Some(6.0),
                round_under_bust: Some(8.0),
                half_length: Some(25.0),
                blouse_length: Some(30.0),
                sleeve_length: Some(22.0),
                round_sleeve: Some(14.0),
                dress_length: Some(32.0),
                chest: Some(36.0),
                round_shoulder: Some(15.0),
                skirt_length: Some(34.0),
                trousers_length: Some(20.0),
                round_thigh: Some(40.0),
                round_knee: Some(28.0),
                round_feet: Some(24.0),
            },
            ..Default::default()
        },
        CustomerDto {
            name: "Adaeze Okafor".into(),
            email: "adaeze@example.com".into(),
            phone_number: "+2348031234567".into(),
            gender: "female".into(),
            address: "4 Marina Rd, Lagos".into(),
            age: Some(27),
            customer_description: "Wedding aso-ebi, fitting in March".into(),
            measurements: Measurements {
                bust: Some(36.5),
                waist: Some(30.0),
                hip: Some(40.0),
                dress_length: Some(58.0),
                ..Default::default()
            },
            ..Default::default()
        },
        CustomerDto {
            name: "Tunde Bakare".into(),
            email: "tunde@example.com".into(),
            phone_number: "+2348059876543".into(),
            gender: "male".into(),
            address: "Plot 7, Wuse II\nAbuja".into(),
            age: None,
            customer_description: "Agbada, prefers dark colours".into(),
            measurements: Measurements {
                chest: Some(42.0),
                shoulder: Some(19.0),
                sleeve_length: Some(25.0),
                trousers_length: Some(41.0),
                round_thigh: Some(24.0),
                ..Default::default()
            },
            ..Default::default()
        },
    ];

    for dto in data {
        create(dto).await?;
    }

    Ok(())
}
