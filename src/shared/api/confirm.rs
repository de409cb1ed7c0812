use actix_web::HttpResponse;
use serde::Deserialize;
use utoipa::IntoParams;

use super::ApiResponse;

/// `?confirm=true` guard in front of destructive admin actions.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

impl ConfirmQuery {
    pub fn require(&self) -> Result<(), HttpResponse> {
        if self.confirm {
            Ok(())
        } else {
            Err(ApiResponse::bad_request(
                "CONFIRMATION_REQUIRED",
                "Deletion must be confirmed with ?confirm=true",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_confirmation_is_rejected() {
        let resp = ConfirmQuery::default().require().unwrap_err();
        assert_eq!(resp.status(), 400);
        assert!(ConfirmQuery { confirm: true }.require().is_ok());
    }
}
