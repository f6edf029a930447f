use crate::{
    apis::{
        contacts::{Contact, CreateContactRequest, FetchAllContactsRequest, UpdateContactRequest},
        require, Collection, SetActive,
    },
    http::{ApiResponse, HttpClient},
    Error,
};
use std::sync::Arc;
use urlencoding::encode;

/// RazorpayX contacts APIs client.
#[derive(Clone, Debug)]
pub struct ContactsApi {
    inner: Arc<HttpClient>,
}

impl ContactsApi {
    pub(crate) fn new(inner: Arc<HttpClient>) -> Self {
        Self { inner }
    }

    /// Creates a new contact.
    ///
    /// If a contact with the same details already exists, RazorpayX returns the existing one.
    #[tracing::instrument(
        name = "Create Contact",
        skip(self, request),
        fields(reference_id = ?request.reference_id)
    )]
    pub async fn create(
        &self,
        request: &CreateContactRequest,
    ) -> Result<ApiResponse<Contact>, Error> {
        request.validate()?;

        self.inner.post("contacts", Some(request)).await
    }

    /// Updates the details of an existing contact.
    #[tracing::instrument(name = "Update Contact", skip(self, request))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateContactRequest,
    ) -> Result<ApiResponse<Contact>, Error> {
        require("contact id", id)?;
        request.validate()?;

        self.inner
            .patch(&format!("contacts/{}", encode(id)), request)
            .await
    }

    /// Activates or deactivates a contact.
    #[tracing::instrument(name = "Set Contact Active", skip(self))]
    pub async fn set_active(&self, id: &str, active: bool) -> Result<ApiResponse<Contact>, Error> {
        require("contact id", id)?;

        self.inner
            .patch(&format!("contacts/{}", encode(id)), &SetActive { active })
            .await
    }

    /// Lists contacts matching the given filters, most recent first.
    #[tracing::instrument(name = "Fetch All Contacts", skip(self, request))]
    pub async fn fetch_all(
        &self,
        request: &FetchAllContactsRequest,
    ) -> Result<ApiResponse<Collection<Contact>>, Error> {
        let query = request.pagination.query(request)?;

        self.inner.get("contacts", Some(&query)).await
    }

    #[tracing::instrument(name = "Fetch Contact by ID", skip(self))]
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse<Contact>, Error> {
        require("contact id", id)?;

        self.inner
            .get::<_, ()>(&format!("contacts/{}", encode(id)), None)
            .await
    }
}
