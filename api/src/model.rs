use serde::Serialize;

/// Template variables interpolated by the provider into the email body.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
}

/// Request envelope expected by the send endpoint. The public key travels
/// in the `user_id` field.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(to_email: Option<&str>) -> TemplateParams {
        TemplateParams {
            from_name: "Jane Doe".into(),
            from_email: "jane@example.com".into(),
            message: "I would like a consultation.".into(),
            to_email: to_email.map(String::from),
        }
    }

    #[test]
    fn send_request_envelope() {
        let params = params(None);
        let request = SendRequest {
            service_id: "service_abc",
            template_id: "template_xyz",
            user_id: "public_123",
            template_params: &params,
        };

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "public_123",
                "template_params": {
                    "from_name": "Jane Doe",
                    "from_email": "jane@example.com",
                    "message": "I would like a consultation.",
                },
            })
        );
    }

    #[test]
    fn to_email_included_when_set() {
        let value = serde_json::to_value(&params(Some("desk@example.com"))).unwrap();

        assert_eq!(value["to_email"], "desk@example.com");
    }

    #[test]
    fn to_email_omitted_when_absent() {
        let value = serde_json::to_value(&params(None)).unwrap();

        assert!(value.get("to_email").is_none());
    }
}
