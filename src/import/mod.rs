//! # CSV Bulk Loader
//!
//! Maps the dataset CSV ("Transaction ID", "Customer Name", ...) into
//! sale records. Runs once at startup; the store is read-only
//! afterwards. A malformed row aborts the load with its row number —
//! rows are never skipped silently.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::model::date::parse_datetime;
use crate::model::{Gender, SaleRecord};

/// Row cap applied when the config does not override it
pub const DEFAULT_ROW_CAP: usize = 1000;

/// Bulk-load failures
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {message}")]
    Row { row: usize, message: String },
}

/// One raw CSV row, named as in the dataset headers
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Transaction ID")]
    transaction_id: u64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Customer Name")]
    customer_name: String,
    #[serde(rename = "Phone Number")]
    phone_number: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Customer Region")]
    customer_region: String,
    #[serde(rename = "Customer Type")]
    customer_type: String,
    #[serde(rename = "Product ID")]
    product_id: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Product Category")]
    product_category: String,
    #[serde(rename = "Tags", default)]
    tags: Option<String>,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Price per Unit")]
    price_per_unit: f64,
    #[serde(rename = "Discount Percentage", default)]
    discount_percentage: f64,
    #[serde(rename = "Total Amount")]
    total_amount: f64,
    #[serde(rename = "Final Amount")]
    final_amount: f64,
    #[serde(rename = "Payment Method")]
    payment_method: String,
    #[serde(rename = "Order Status")]
    order_status: String,
    #[serde(rename = "Delivery Type")]
    delivery_type: String,
    #[serde(rename = "Store ID")]
    store_id: String,
    #[serde(rename = "Store Location")]
    store_location: String,
    #[serde(rename = "Salesperson ID")]
    salesperson_id: String,
    #[serde(rename = "Employee Name")]
    employee_name: String,
}

impl CsvRow {
    fn into_record(self, row: usize) -> Result<SaleRecord, ImportError> {
        let date = parse_datetime(&self.date).ok_or_else(|| ImportError::Row {
            row,
            message: format!("unparseable date: {}", self.date),
        })?;

        let gender = match self.gender.as_str() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::Other,
        };

        let tags = self
            .tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Ok(SaleRecord {
            transaction_id: self.transaction_id,
            date,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            phone_number: self.phone_number,
            gender,
            age: self.age,
            customer_region: self.customer_region,
            customer_type: self.customer_type,
            product_id: self.product_id,
            product_name: self.product_name,
            brand: self.brand,
            product_category: self.product_category,
            tags,
            quantity: self.quantity,
            price_per_unit: self.price_per_unit,
            discount_percentage: self.discount_percentage,
            total_amount: self.total_amount,
            final_amount: self.final_amount,
            payment_method: self.payment_method,
            order_status: self.order_status,
            delivery_type: self.delivery_type,
            store_id: self.store_id,
            store_location: self.store_location,
            salesperson_id: self.salesperson_id,
            employee_name: self.employee_name,
        })
    }
}

/// Load at most `cap` records from a dataset CSV file
pub fn load_csv_file(path: &Path, cap: usize) -> Result<Vec<SaleRecord>, ImportError> {
    let file = File::open(path)?;
    load_csv(file, cap)
}

/// Load at most `cap` records from any CSV reader
pub fn load_csv<R: Read>(reader: R, cap: usize) -> Result<Vec<SaleRecord>, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in csv_reader.deserialize::<CsvRow>().enumerate() {
        if records.len() >= cap {
            break;
        }
        // data rows start at line 2, after the header
        let row_number = index + 2;
        let row = row?;
        records.push(row.into_record(row_number)?);
    }

    tracing::info!(count = records.len(), "dataset loaded");
    Ok(records)
}
