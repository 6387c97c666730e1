//! Shared building blocks used by every crate in the workspace.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_body_serializes_as_message_field() {
        let body = types::MessageBody::new("Car is invalid");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Car is invalid"}));
    }
}
