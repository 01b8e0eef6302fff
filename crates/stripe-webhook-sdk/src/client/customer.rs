//! Customer resource operations.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ListPage};
use crate::error::ApiError;

/// A customer record.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Unique customer identifier
    pub id: String,

    /// Always `"customer"`
    pub object: String,

    /// Customer email address
    pub email: Option<String>,

    /// Customer display name
    pub name: Option<String>,

    /// Free-form description
    pub description: Option<String>,

    /// Creation time (Unix seconds)
    pub created: i64,

    /// Whether the record exists in live mode
    pub livemode: bool,
}

/// Confirmation returned when a customer is deleted.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedCustomer {
    /// Identifier of the deleted customer
    pub id: String,

    /// Always `true`
    pub deleted: bool,
}

/// Request to create a customer.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateCustomerRequest {
    /// Customer email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to update a customer.
#[derive(Debug, Clone, Serialize, Default)]
pub struct UpdateCustomerRequest {
    /// Customer email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Customer display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiClient {
    // ========================================================================
    // Customer Operations
    // ========================================================================

    /// Create a customer.
    pub async fn create_customer(
        &self,
        request: &CreateCustomerRequest,
    ) -> Result<Customer, ApiError> {
        self.post_form("customers", request).await
    }

    /// Retrieve a customer by id.
    pub async fn retrieve_customer(&self, customer_id: &str) -> Result<Customer, ApiError> {
        self.get_json(&format!("customers/{customer_id}"), &[]).await
    }

    /// Update a customer. Unset fields are left unchanged.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        request: &UpdateCustomerRequest,
    ) -> Result<Customer, ApiError> {
        self.post_form(&format!("customers/{customer_id}"), request)
            .await
    }

    /// Delete a customer.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<DeletedCustomer, ApiError> {
        self.delete_json(&format!("customers/{customer_id}")).await
    }

    /// List customers, newest first.
    pub async fn list_customers(
        &self,
        limit: Option<u8>,
    ) -> Result<ListPage<Customer>, ApiError> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        self.get_json("customers", &query).await
    }
}

#[cfg(test)]
#[path = "customer_tests.rs"]
mod tests;
