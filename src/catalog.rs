// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    pub subcategories: Vec<String>,
}

/// Read-only configuration: the ordered category -> subcategory catalog and
/// the ordered payment-mode list. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CategoryDef>,
    payment_modes: Vec<String>,
}

static BUILTIN: Lazy<Catalog> = Lazy::new(|| {
    let categories: &[(&str, &[&str])] = &[
        (
            "Groceries",
            &[
                "Vegetables",
                "Fruits",
                "Dairy",
                "Staples (Rice/Dal)",
                "Snacks",
                "Beverages",
            ],
        ),
        (
            "Utilities",
            &[
                "Electricity",
                "Internet",
                "Water",
                "Gas (LPG)",
                "Mobile Recharge",
            ],
        ),
        ("Housing", &["Rent", "Maintenance", "Repairs", "Furniture"]),
        (
            "Transportation",
            &["Fuel/Petrol", "Auto/Cab", "Public Transport", "Parking"],
        ),
        (
            "Medical",
            &["Medicines", "Doctor Visits", "Tests/Lab", "Insurance"],
        ),
        (
            "Education",
            &["School Fees", "Books", "Tuition", "Online Courses"],
        ),
        (
            "Shopping",
            &["Clothes", "Footwear", "Electronics", "Appliances"],
        ),
        (
            "Entertainment",
            &["Movies", "Subscriptions", "Dining Out", "Outings"],
        ),
        (
            "EMI/Loans",
            &["Home Loan", "Car Loan", "Personal Loan", "Credit Card"],
        ),
        ("Others", &["Gifts", "Donations", "Miscellaneous"]),
    ];
    Catalog {
        categories: categories
            .iter()
            .map(|(name, subs)| CategoryDef {
                name: (*name).to_string(),
                subcategories: subs.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect(),
        payment_modes: ["Cash", "UPI", "Credit Card", "Debit Card", "Net Banking"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    }
});

impl Catalog {
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Optional override next to the data file. A missing or malformed
    /// override falls back to the built-in catalog.
    pub fn load_or_builtin(path: &Path) -> Catalog {
        match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|_| BUILTIN.clone()),
            Err(_) => BUILTIN.clone(),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn category_defs(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn subcategories_for(&self, category: &str) -> Option<&[String]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.subcategories.as_slice())
    }

    pub fn payment_modes(&self) -> &[String] {
        &self.payment_modes
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c.name == name)
    }

    pub fn has_payment_mode(&self, name: &str) -> bool {
        self.payment_modes.iter().any(|m| m == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        BUILTIN.clone()
    }
}
