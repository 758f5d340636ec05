//! # Sale Record
//!
//! One transaction line from the bulk-loaded dataset. Records are
//! immutable after load; the API only ever reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// String form as it appears in the dataset and in filter values
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// A single sales transaction
///
/// Invariants (established by the loader, relied on by the summary):
/// - `final_amount <= total_amount`
/// - `total_amount = quantity * price_per_unit` (pre-discount)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    /// Unique transaction identifier
    pub transaction_id: u64,

    /// Transaction timestamp
    pub date: DateTime<Utc>,

    pub customer_id: String,
    pub customer_name: String,
    pub phone_number: String,
    pub gender: Gender,
    pub age: u32,
    pub customer_region: String,
    pub customer_type: String,

    pub product_id: String,
    pub product_name: String,
    pub brand: String,
    pub product_category: String,

    /// Free-form product tags
    #[serde(default)]
    pub tags: Vec<String>,

    pub quantity: u32,
    pub price_per_unit: f64,
    pub discount_percentage: f64,

    /// Pre-discount amount
    pub total_amount: f64,

    /// Post-discount amount
    pub final_amount: f64,

    pub payment_method: String,
    pub order_status: String,
    pub delivery_type: String,

    pub store_id: String,
    pub store_location: String,
    pub salesperson_id: String,
    pub employee_name: String,
}

impl SaleRecord {
    /// Absolute discount granted on this line
    pub fn discount(&self) -> f64 {
        self.total_amount - self.final_amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> SaleRecord {
        SaleRecord {
            transaction_id: 1,
            date: Utc.with_ymd_and_hms(2023, 5, 12, 0, 0, 0).unwrap(),
            customer_id: "CUST-001".to_string(),
            customer_name: "Asha Verma".to_string(),
            phone_number: "9876543210".to_string(),
            gender: Gender::Female,
            age: 34,
            customer_region: "South".to_string(),
            customer_type: "Returning".to_string(),
            product_id: "P-100".to_string(),
            product_name: "Trail Shoes".to_string(),
            brand: "Stride".to_string(),
            product_category: "Footwear".to_string(),
            tags: vec!["outdoor".to_string(), "running".to_string()],
            quantity: 2,
            price_per_unit: 50.0,
            discount_percentage: 10.0,
            total_amount: 100.0,
            final_amount: 90.0,
            payment_method: "UPI".to_string(),
            order_status: "Delivered".to_string(),
            delivery_type: "Home".to_string(),
            store_id: "S-01".to_string(),
            store_location: "Chennai".to_string(),
            salesperson_id: "E-07".to_string(),
            employee_name: "Ravi Kumar".to_string(),
        }
    }

    #[test]
    fn test_discount() {
        assert_eq!(sample().discount(), 10.0);
    }

    #[test]
    fn test_camel_case_serialization() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["transactionId"], 1);
        assert_eq!(json["customerName"], "Asha Verma");
        assert_eq!(json["gender"], "Female");
        assert_eq!(json["finalAmount"], 90.0);
    }
}
