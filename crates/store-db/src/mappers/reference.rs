//! Reference model -> entity mappers

use store_core::entities::{Category, Platform};

use crate::models::ReferenceModel;

impl From<ReferenceModel> for Platform {
    fn from(model: ReferenceModel) -> Self {
        Platform {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<ReferenceModel> for Category {
    fn from(model: ReferenceModel) -> Self {
        Category {
            id: model.id,
            name: model.name,
        }
    }
}
