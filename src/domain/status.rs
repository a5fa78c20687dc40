// Service status domain model
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceStatus {
    pub status: &'static str,
    pub service: &'static str,
}

impl ServiceStatus {
    pub fn online() -> Self {
        Self {
            status: "online",
            service: "Cells-Kanban Backend",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_online_payload() {
        let payload = serde_json::to_value(ServiceStatus::online()).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({"status": "online", "service": "Cells-Kanban Backend"})
        );
    }
}
