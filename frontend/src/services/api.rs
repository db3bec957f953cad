use gloo_net::http::{Request, Response};
use shared::api::{activities_url, classify_mutation, MessageResponse, Mutation};
use shared::{ActivityCatalog, ClientError, ClientResult};

pub struct ApiService;

impl ApiService {
    pub async fn list_activities(base: &str) -> ClientResult<ActivityCatalog> {
        let url = activities_url(base);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status(),
                detail: None,
            });
        }

        Self::parse(response).await
    }

    /// Signup is a `POST`, unregister a `DELETE`; neither sends a body.
    pub async fn mutate(
        base: &str,
        mutation: Mutation,
        activity: &str,
        email: &str,
    ) -> ClientResult<MessageResponse> {
        let url = mutation.url(base, activity, email);

        let request = match mutation {
            Mutation::Signup => Request::post(&url),
            Mutation::Unregister => Request::delete(&url),
        };

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        // An unreadable body counts as empty, which fails decoding on a 2xx.
        let body = response.text().await.unwrap_or_default();
        classify_mutation(response.status(), &body)
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}
