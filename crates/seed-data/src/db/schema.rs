//! Table definitions.

use super::Statement;

/// The four seeded tables, in seeding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Users,
    Customers,
    Invoices,
    Revenue,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Users, Table::Customers, Table::Invoices, Table::Revenue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Customers => "customers",
            Table::Invoices => "invoices",
            Table::Revenue => "revenue",
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` for this table.
    pub fn create_statement(&self) -> Statement {
        Statement::new(match self {
            Table::Users => {
                r#"
                CREATE TABLE IF NOT EXISTS users (
                    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email TEXT NOT NULL UNIQUE,
                    password TEXT NOT NULL
                )
                "#
            }
            Table::Customers => {
                r#"
                CREATE TABLE IF NOT EXISTS customers (
                    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
                    name VARCHAR(255) NOT NULL,
                    email VARCHAR(255) NOT NULL,
                    image_url VARCHAR(255) NOT NULL
                )
                "#
            }
            Table::Invoices => {
                r#"
                CREATE TABLE IF NOT EXISTS invoices (
                    id UUID DEFAULT gen_random_uuid() PRIMARY KEY,
                    customer_id UUID NOT NULL,
                    amount INT NOT NULL,
                    status VARCHAR(255) NOT NULL,
                    date DATE NOT NULL
                )
                "#
            }
            Table::Revenue => {
                r#"
                CREATE TABLE IF NOT EXISTS revenue (
                    month VARCHAR(4) NOT NULL UNIQUE,
                    revenue INT NOT NULL
                )
                "#
            }
        })
    }

    pub fn delete_statement(&self) -> Statement {
        Statement::new(match self {
            Table::Users => "DELETE FROM users",
            Table::Customers => "DELETE FROM customers",
            Table::Invoices => "DELETE FROM invoices",
            Table::Revenue => "DELETE FROM revenue",
        })
    }
}
