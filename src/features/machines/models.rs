use serde::{Deserialize, Serialize};

/// Machine data model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Machine {
    pub id: String,
    pub name: String,
    pub location: String,
    pub city: String,
    pub is_active: bool,
    pub created_at: String,
    pub created_by: String,
}

/// Machine creation DTO
#[derive(Debug, Deserialize)]
pub struct CreateMachineData {
    pub name: String,
    pub location: String,
    pub city: String,
}

/// Machine update DTO (partial merge)
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMachineData {
    pub name: Option<String>,
    pub location: Option<String>,
    pub city: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_serialization() {
        let machine = Machine {
            id: "machine-1".to_string(),
            name: "Uppsala #1".to_string(),
            location: "Gränby Centrum".to_string(),
            city: "Uppsala".to_string(),
            is_active: true,
            created_at: "2024-01-01T00:00:00+01:00".to_string(),
            created_by: "admin-uid".to_string(),
        };

        let json = serde_json::to_string(&machine).unwrap();
        assert!(json.contains("\"name\":\"Uppsala #1\""));
        assert!(json.contains("\"is_active\":true"));

        let deserialized: Machine = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, machine.id);
        assert_eq!(deserialized.city, machine.city);
    }

    #[test]
    fn test_create_machine_data_deserialization() {
        let json = r#"{
            "name": "Stockholm #2",
            "location": "Mall of Scandinavia",
            "city": "Stockholm"
        }"#;

        let data: CreateMachineData = serde_json::from_str(json).unwrap();
        assert_eq!(data.name, "Stockholm #2");
        assert_eq!(data.city, "Stockholm");
    }
}
