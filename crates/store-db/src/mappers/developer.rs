//! Developer model -> entity mapper

use store_core::entities::Developer;

use crate::models::DeveloperModel;

impl From<DeveloperModel> for Developer {
    fn from(model: DeveloperModel) -> Self {
        Developer {
            id: model.developer_id,
            name: model.name,
            country: model.country,
            website: model.website,
            created_at: model.created_at,
        }
    }
}
