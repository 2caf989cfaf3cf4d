use std::ops::Range;

/// Роль поля в записи выгрузки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Id,
    Data(&'static str),
    CreatedAt,
    UpdatedAt,
}

/// Описание записи фиксированной ширины в сырой выгрузке.
///
/// Ширина записи и диапазон полей данных выводятся из списка ролей, так что
/// добавление колонки требует правки только этого списка.
#[derive(Debug, Clone, Copy)]
pub struct RecordSchema {
    pub fields: &'static [FieldRole],
}

impl RecordSchema {
    pub const fn width(&self) -> usize {
        self.fields.len()
    }

    /// Диапазон полей данных. Поля данных в записи идут подряд.
    pub const fn data_range(&self) -> Range<usize> {
        let mut start = 0;
        while start < self.fields.len() && !matches!(self.fields[start], FieldRole::Data(_)) {
            start += 1;
        }
        let mut end = start;
        while end < self.fields.len() && matches!(self.fields[end], FieldRole::Data(_)) {
            end += 1;
        }
        start..end
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter_map(|role| match role {
                FieldRole::Data(name) => Some(*name),
                _ => None,
            })
            .collect()
    }
}

use FieldRole::{CreatedAt, Data, Id, UpdatedAt};

pub const CUSTOMER_EXPORT_SCHEMA: RecordSchema = RecordSchema {
    fields: &[
        Id,
        Data("name"),
        Data("email"),
        Data("phone_number"),
        Data("gender"),
        Data("address"),
        Data("age"),
        Data("customer_description"),
        Data("bust"),
        Data("waist"),
        Data("hip"),
        Data("shoulder"),
        Data("bustpoint"),
        Data("shoulder_to_underbust"),
        Data("round_under_bust"),
        Data("half_length"),
        Data("blouse_length"),
        Data("sleeve_length"),
        Data("round_sleeve"),
        Data("dress_length"),
        Data("chest"),
        Data("round_shoulder"),
        Data("skirt_length"),
        Data("trousers_length"),
        Data("round_thigh"),
        Data("round_knee"),
        Data("round_feet"),
        CreatedAt,
        UpdatedAt,
    ],
};

pub const FIELDS_PER_RECORD: usize = CUSTOMER_EXPORT_SCHEMA.width();
pub const START_INDEX: usize = CUSTOMER_EXPORT_SCHEMA.data_range().start;
pub const END_INDEX: usize = CUSTOMER_EXPORT_SCHEMA.data_range().end;
pub const HEADER_COUNT: usize = END_INDEX - START_INDEX;
