//! Column schema for sales files
//!
//! Maps the semantic fields the analyses understand to the literal header
//! text found in the source file. Headers are compared exactly: no case
//! folding, no accent stripping, no trimming.

use std::fmt;

/// Semantic field understood by the analysis engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Item identifier
    Product,
    /// Units sold
    Quantity,
    /// Monetary total of the row
    TotalValue,
    /// Price of a single unit
    UnitPrice,
    /// Buyer identifier
    Customer,
}

impl Field {
    /// All semantic fields, in canonical order
    pub const ALL: [Field; 5] = [
        Field::Product,
        Field::Quantity,
        Field::TotalValue,
        Field::UnitPrice,
        Field::Customer,
    ];

    /// Canonical (english) name of the field
    pub fn name(self) -> &'static str {
        match self {
            Field::Product => "product",
            Field::Quantity => "quantity",
            Field::TotalValue => "total_value",
            Field::UnitPrice => "unit_price",
            Field::Customer => "customer",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Header names expected for each semantic field
///
/// The default schema uses the canonical field names. Localised files are
/// handled with a preset such as [`ColumnSchema::portuguese`] or by overriding
/// individual columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    product: String,
    quantity: String,
    total_value: String,
    unit_price: String,
    customer: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        ColumnSchema {
            product: Field::Product.name().to_string(),
            quantity: Field::Quantity.name().to_string(),
            total_value: Field::TotalValue.name().to_string(),
            unit_price: Field::UnitPrice.name().to_string(),
            customer: Field::Customer.name().to_string(),
        }
    }
}

impl ColumnSchema {
    /// Headers used by the stationery-shop sales exports
    pub fn portuguese() -> Self {
        ColumnSchema {
            product: "Produto".to_string(),
            quantity: "Quantidade".to_string(),
            total_value: "Valor Total".to_string(),
            unit_price: "Preço Unitário".to_string(),
            customer: "Cliente".to_string(),
        }
    }

    /// Header name mapped to a semantic field
    pub fn column(&self, field: Field) -> &str {
        match field {
            Field::Product => &self.product,
            Field::Quantity => &self.quantity,
            Field::TotalValue => &self.total_value,
            Field::UnitPrice => &self.unit_price,
            Field::Customer => &self.customer,
        }
    }

    /// Override the header name of a single field
    pub fn with_column(mut self, field: Field, header: impl Into<String>) -> Self {
        let header = header.into();
        match field {
            Field::Product => self.product = header,
            Field::Quantity => self.quantity = header,
            Field::TotalValue => self.total_value = header,
            Field::UnitPrice => self.unit_price = header,
            Field::Customer => self.customer = header,
        }
        self
    }
}
