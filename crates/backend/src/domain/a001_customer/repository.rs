use chrono::Utc;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerId, Measurements};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub age: Option<i32>,
    pub customer_description: String,
    pub bust: Option<f64>,
    pub waist: Option<f64>,
    pub hip: Option<f64>,
    pub shoulder: Option<f64>,
    pub bustpoint: Option<f64>,
    pub shoulder_to_underbust: Option<f64>,
    pub round_under_bust: Option<f64>,
    pub half_length: Option<f64>,
    pub blouse_length: Option<f64>,
    pub sleeve_length: Option<f64>,
    pub round_sleeve: Option<f64>,
    pub dress_length: Option<f64>,
    pub chest: Option<f64>,
    pub round_shoulder: Option<f64>,
    pub skirt_length: Option<f64>,
    pub trousers_length: Option<f64>,
    pub round_thigh: Option<f64>,
    pub round_knee: Option<f64>,
    pub round_feet: Option<f64>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| {
            tracing::warn!("a001_customer: invalid id {}, generating new UUID", m.id);
            Uuid::new_v4()
        });

        Customer {
            id: CustomerId(uuid),
            name: m.name,
            email: m.email,
            phone_number: m.phone_number,
            gender: m.gender,
            address: m.address,
            age: m.age,
            customer_description: m.customer_description,
            measurements: Measurements {
                bust: m.bust,
                waist: m.waist,
                hip: m.hip,
                shoulder: m.shoulder,
                bustpoint: m.bustpoint,
                shoulder_to_underbust: m.shoulder_to_underbust,
                round_under_bust: m.round_under_bust,
                half_length: m.half_length,
                blouse_length: m.blouse_length,
                sleeve_length: m.sleeve_length,
                round_sleeve: m.round_sleeve,
                dress_length: m.dress_length,
                chest: m.chest,
                round_shoulder: m.round_shoulder,
                skirt_length: m.skirt_length,
                trousers_length: m.trousers_length,
                round_thigh: m.round_thigh,
                round_knee: m.round_knee,
                round_feet: m.round_feet,
            },
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Customer) -> ActiveModel {
    let m = &aggregate.measurements;
    ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        name: Set(aggregate.name.clone()),
        email: Set(aggregate.email.clone()),
        phone_number: Set(aggregate.phone_number.clone()),
        gender: Set(aggregate.gender.clone()),
        address: Set(aggregate.address.clone()),
        age: Set(aggregate.age),
        customer_description: Set(aggregate.customer_description.clone()),
        bust: Set(m.bust),
        waist: Set(m.waist),
        hip: Set(m.hip),
        shoulder: Set(m.shoulder),
        bustpoint: Set(m.bustpoint),
        shoulder_to_underbust: Set(m.shoulder_to_underbust),
        round_under_bust: Set(m.round_under_bust),
        half_length: Set(m.half_length),
        blouse_length: Set(m.blouse_length),
        sleeve_length: Set(m.sleeve_length),
        round_sleeve: Set(m.round_sleeve),
        dress_length: Set(m.dress_length),
        chest: Set(m.chest),
        round_shoulder: Set(m.round_shoulder),
        skirt_length: Set(m.skirt_length),
        trousers_length: Set(m.trousers_length),
        round_thigh: Set(m.round_thigh),
        round_knee: Set(m.round_knee),
        round_feet: Set(m.round_feet),
        is_deleted: Set(aggregate.is_deleted),
        created_at: Set(Some(aggregate.created_at)),
        updated_at: Set(Some(aggregate.updated_at)),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Customer>> {
    let mut items: Vec<Customer> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Customer) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.id.value())
}

pub async fn update(aggregate: &Customer) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
