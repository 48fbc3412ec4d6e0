//! Fixture datasets.
//!
//! [`Fixtures::placeholder`] is the built-in demo data set. A bundle with the
//! same shape can also be loaded from a JSON file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use time::macros::date;
use uuid::{Uuid, uuid};

use crate::db::SeedError;
use crate::models::{Customer, Invoice, InvoiceStatus, RevenueSample, User};

/// The four datasets seeded together.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub revenue: Vec<RevenueSample>,
}

const EVIL_RABBIT: Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS_ORBAN: Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

impl Fixtures {
    /// Returns the built-in demo data set.
    pub fn placeholder() -> Self {
        Self {
            users: vec![User {
                id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
                name: "User".to_string(),
                email: "user@nextmail.com".to_string(),
                password: "123456".to_string(),
            }],
            customers: vec![
                customer(EVIL_RABBIT, "Evil Rabbit", "evil@rabbit.com", "evil-rabbit"),
                customer(
                    DELBA_DE_OLIVEIRA,
                    "Delba de Oliveira",
                    "delba@oliveira.com",
                    "delba-de-oliveira",
                ),
                customer(LEE_ROBINSON, "Lee Robinson", "lee@robinson.com", "lee-robinson"),
                customer(
                    MICHAEL_NOVOTNY,
                    "Michael Novotny",
                    "michael@novotny.com",
                    "michael-novotny",
                ),
                customer(AMY_BURNS, "Amy Burns", "amy@burns.com", "amy-burns"),
                customer(BALAZS_ORBAN, "Balazs Orban", "balazs@orban.com", "balazs-orban"),
            ],
            invoices: vec![
                invoice(EVIL_RABBIT, 15795, InvoiceStatus::Pending, date!(2022 - 12 - 06)),
                invoice(DELBA_DE_OLIVEIRA, 20348, InvoiceStatus::Pending, date!(2022 - 11 - 14)),
                invoice(AMY_BURNS, 3040, InvoiceStatus::Paid, date!(2022 - 10 - 29)),
                invoice(MICHAEL_NOVOTNY, 44800, InvoiceStatus::Paid, date!(2023 - 09 - 10)),
                invoice(BALAZS_ORBAN, 34577, InvoiceStatus::Pending, date!(2023 - 08 - 05)),
                invoice(LEE_ROBINSON, 54246, InvoiceStatus::Pending, date!(2023 - 07 - 16)),
                invoice(EVIL_RABBIT, 666, InvoiceStatus::Pending, date!(2023 - 06 - 27)),
                invoice(MICHAEL_NOVOTNY, 32545, InvoiceStatus::Paid, date!(2023 - 06 - 09)),
                invoice(AMY_BURNS, 1250, InvoiceStatus::Paid, date!(2023 - 06 - 17)),
                invoice(BALAZS_ORBAN, 8546, InvoiceStatus::Paid, date!(2023 - 06 - 07)),
                invoice(DELBA_DE_OLIVEIRA, 500, InvoiceStatus::Paid, date!(2023 - 08 - 19)),
                invoice(BALAZS_ORBAN, 8945, InvoiceStatus::Paid, date!(2023 - 06 - 03)),
                invoice(LEE_ROBINSON, 1000, InvoiceStatus::Paid, date!(2022 - 06 - 05)),
            ],
            revenue: [
                ("Jan", 2000),
                ("Feb", 1800),
                ("Mar", 2200),
                ("Apr", 2500),
                ("May", 2300),
                ("Jun", 3200),
                ("Jul", 3500),
                ("Aug", 3700),
                ("Sep", 2500),
                ("Oct", 2800),
                ("Nov", 3000),
                ("Dec", 4800),
            ]
            .into_iter()
            .map(|(month, revenue)| RevenueSample {
                month: month.to_string(),
                revenue,
            })
            .collect(),
        }
    }

    /// Loads a fixture bundle from a JSON file. Missing datasets are empty.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Fixtures(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&contents)
            .map_err(|e| SeedError::Fixtures(format!("{}: {e}", path.display())))
    }
}

fn customer(id: Uuid, name: &str, email: &str, image: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        image_url: format!("/customers/{image}.png"),
    }
}

fn invoice(customer_id: Uuid, amount: i32, status: InvoiceStatus, date: time::Date) -> Invoice {
    Invoice {
        id: None,
        customer_id,
        amount,
        status,
        date,
    }
}
