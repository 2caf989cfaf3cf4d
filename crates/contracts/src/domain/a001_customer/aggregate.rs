use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор клиента ателье
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Measurements
// ============================================================================

/// Мерки клиента (в дюймах), порядок полей совпадает с колонками выгрузки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
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
}

impl Measurements {
    pub const COUNT: usize = 19;

    pub fn values(&self) -> [Option<f64>; Self::COUNT] {
        [
            self.bust,
            self.waist,
            self.hip,
            self.shoulder,
            self.bustpoint,
            self.shoulder_to_underbust,
            self.round_under_bust,
            self.half_length,
            self.blouse_length,
            self.sleeve_length,
            self.round_sleeve,
            self.dress_length,
            self.chest,
            self.round_shoulder,
            self.skirt_length,
            self.trousers_length,
            self.round_thigh,
            self.round_knee,
            self.round_feet,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент ателье: контакты, описание и мерки
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub gender: String,
    pub address: String,
    pub age: Option<i32>,
    pub customer_description: String,

    #[serde(flatten)]
    pub measurements: Measurements,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_deleted: bool,
}

impl Customer {
    /// Создать нового клиента из формы
    pub fn new_for_insert(dto: &CustomerDto) -> Self {
        let now = Utc::now();
        let mut customer = Self {
            id: CustomerId::new_v4(),
            name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            gender: String::new(),
            address: String::new(),
            age: None,
            customer_description: String::new(),
            measurements: Measurements::default(),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        customer.update(dto);
        customer
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &CustomerDto) {
        self.name = dto.name.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.phone_number = dto.phone_number.trim().to_string();
        self.gender = dto.gender.trim().to_string();
        self.address = dto.address.clone();
        self.age = dto.age;
        self.customer_description = dto.customer_description.clone();
        self.measurements = dto.measurements.clone();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Customer name must not be empty".into());
        }
        if !self.email.is_empty() && !self.email.contains('@') {
            return Err(format!("Invalid email address: {}", self.email));
        }
        // `\` на конце склеивается с закрывающей кавычкой в выгрузке u101
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("phone_number", &self.phone_number),
            ("gender", &self.gender),
            ("address", &self.address),
            ("customer_description", &self.customer_description),
        ] {
            if value.ends_with('\\') {
                return Err(format!("Field {} must not end with a backslash", field));
            }
        }
        if let Some(age) = self.age {
            if !(0..=150).contains(&age) {
                return Err(format!("Age out of range: {}", age));
            }
        }
        if let Some(bad) = self
            .measurements
            .values()
            .iter()
            .flatten()
            .find(|v| !v.is_finite() || **v < 0.0)
        {
            return Err(format!("Invalid measurement value: {}", bad));
        }
        Ok(())
    }

    /// Хук перед записью
    pub fn before_write(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Значения одной записи выгрузки: id, 26 полей данных, created_at, updated_at.
    /// Отсутствующие значения выгружаются пустой строкой.
    pub fn export_values(&self) -> Vec<String> {
        let mut values = Vec::with_capacity(9 + Measurements::COUNT);
        values.push(self.id.value().to_string());
        values.push(self.name.clone());
        values.push(self.email.clone());
        values.push(self.phone_number.clone());
        values.push(self.gender.clone());
        values.push(self.address.clone());
        values.push(self.age.map(|a| a.to_string()).unwrap_or_default());
        values.push(self.customer_description.clone());
        values.extend(
            self.measurements
                .values()
                .iter()
                .map(|m| m.map(|v| v.to_string()).unwrap_or_default()),
        );
        values.push(self.created_at.to_rfc3339());
        values.push(self.updated_at.to_rfc3339());
        values
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub address: String,
    pub age: Option<i32>,
    #[serde(default)]
    pub customer_description: String,

    #[serde(flatten)]
    pub measurements: Measurements,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dto() -> CustomerDto {
        CustomerDto {
            name: "  Jane Doe ".into(),
            email: "jane@x.com".into(),
            phone_number: "+2348000000000".into(),
            gender: "female".into(),
            address: "12 Main St".into(),
            age: Some(30),
            customer_description: "likes florals".into(),
            measurements: Measurements {
                bust: Some(34.0),
                waist: Some(28.5),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn new_for_insert_trims_identity_fields() {
        let customer = Customer::new_for_insert(&sample_dto());
        assert_eq!(customer.name, "Jane Doe");
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut customer = Customer::new_for_insert(&sample_dto());
        customer.name = "   ".into();
        assert!(customer.validate().is_err());

        let mut customer = Customer::new_for_insert(&sample_dto());
        customer.email = "jane.example.com".into();
        assert!(customer.validate().is_err());

        let mut customer = Customer::new_for_insert(&sample_dto());
        customer.age = Some(-1);
        assert!(customer.validate().is_err());

        let mut customer = Customer::new_for_insert(&sample_dto());
        customer.measurements.hip = Some(f64::NAN);
        assert!(customer.validate().is_err());
    }

    #[test]
    fn validate_rejects_trailing_backslash() {
        let mut customer = Customer::new_for_insert(&sample_dto());
        customer.customer_description = r"C:\".into();
        assert_eq!(
            customer.validate(),
            Err("Field customer_description must not end with a backslash".to_string())
        );

        customer.customer_description = r"C:\fabrics\silk".into();
        assert!(customer.validate().is_ok());
    }

    #[test]
    fn export_values_follow_record_layout() {
        let customer = Customer::new_for_insert(&sample_dto());
        let values = customer.export_values();

        assert_eq!(values.len(), 29);
        assert_eq!(values[0], customer.id.value().to_string());
        assert_eq!(values[1], "Jane Doe");
        assert_eq!(values[6], "30");
        assert_eq!(values[8], "34");
        assert_eq!(values[9], "28.5");
        assert_eq!(values[10], "");
        assert_eq!(values[27], customer.created_at.to_rfc3339());
    }

    #[test]
    fn dto_deserializes_flat_measurements() {
        let dto: CustomerDto = serde_json::from_str(
            r#"{"id":null,"name":"Ada","age":null,"bust":36.5,"round_feet":9.5}"#,
        )
        .unwrap();
        assert_eq!(dto.measurements.bust, Some(36.5));
        assert_eq!(dto.measurements.round_feet, Some(9.5));
        assert!(dto.email.is_empty());
    }
}
