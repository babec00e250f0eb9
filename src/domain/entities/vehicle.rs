//! Vehicle entity.

/// Oldest accepted manufacturing year.
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// A persisted vehicle record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub year: i32,
}

impl Vehicle {
    pub fn new(id: i64, name: String, brand: String, year: i32) -> Self {
        Self {
            id,
            name,
            brand,
            year,
        }
    }

    /// Replaces every mutable field, keeping the id.
    pub fn overwrite(&mut self, changes: NewVehicle) {
        self.name = changes.name;
        self.brand = changes.brand;
        self.year = changes.year;
    }
}

/// Input data for creating a vehicle, or the full replacement for an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub name: String,
    pub brand: String,
    pub year: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_creation() {
        let vehicle = Vehicle::new(1, "teste".to_string(), "marca teste".to_string(), 1995);

        assert_eq!(vehicle.id, 1);
        assert_eq!(vehicle.name, "teste");
        assert_eq!(vehicle.brand, "marca teste");
        assert_eq!(vehicle.year, 1995);
    }

    #[test]
    fn test_overwrite_keeps_id() {
        let mut vehicle = Vehicle::new(7, "Fusca".to_string(), "VW".to_string(), 1980);

        vehicle.overwrite(NewVehicle {
            name: "Brasilia".to_string(),
            brand: "Volkswagen".to_string(),
            year: 1975,
        });

        assert_eq!(vehicle.id, 7);
        assert_eq!(vehicle.name, "Brasilia");
        assert_eq!(vehicle.brand, "Volkswagen");
        assert_eq!(vehicle.year, 1975);
    }
}
