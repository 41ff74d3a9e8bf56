//! Endpoint paths per resource and operation

use backoffice_core::{RecordId, Resource};

pub const LEAD_STATS: &str = "/api/contact/stats";
pub const FAQ_DELETE_MULTIPLE: &str = "/api/faqs/delete-multiple";

pub fn lead_status(id: RecordId) -> String {
    format!("/api/contact/leads/{id}/status")
}

pub fn blog(id: RecordId) -> String {
    format!("/api/blogs/{id}")
}

pub fn service_toggle(id: RecordId) -> String {
    format!("/api/services/toggle-active/{id}")
}

/// POST path for new records
pub fn create(resource: Resource) -> Option<String> {
    match resource {
        Resource::Blogs => Some("/api/blogs".to_string()),
        Resource::Services => Some("/api/services/create".to_string()),
        Resource::Faqs => Some("/api/faqs/create".to_string()),
        Resource::Testimonials => Some("/api/testimonials/admin/create".to_string()),
        Resource::Leads | Resource::Galleries => None,
    }
}

/// PUT path for an existing record
pub fn update(resource: Resource, id: RecordId) -> Option<String> {
    match resource {
        Resource::Blogs => Some(blog(id)),
        Resource::Faqs => Some(format!("/api/faqs/update/{id}")),
        Resource::Testimonials => Some(format!("/api/testimonials/admin/update/{id}")),
        Resource::Leads | Resource::Services | Resource::Galleries => None,
    }
}

/// DELETE path for a record
pub fn delete(resource: Resource, id: RecordId) -> Option<String> {
    match resource {
        Resource::Blogs => Some(blog(id)),
        Resource::Services => Some(format!("/api/services/delete/{id}")),
        Resource::Faqs => Some(format!("/api/faqs/delete/{id}")),
        Resource::Testimonials => Some(format!("/api/testimonials/admin/delete/{id}")),
        Resource::Leads | Resource::Galleries => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_paths() {
        assert_eq!(create(Resource::Services).unwrap(), "/api/services/create");
        assert_eq!(update(Resource::Faqs, 4).unwrap(), "/api/faqs/update/4");
        assert_eq!(
            delete(Resource::Testimonials, 9).unwrap(),
            "/api/testimonials/admin/delete/9"
        );
        assert_eq!(delete(Resource::Blogs, 2).unwrap(), "/api/blogs/2");
        assert_eq!(lead_status(5), "/api/contact/leads/5/status");
    }

    #[test]
    fn paths_agree_with_capabilities() {
        for resource in Resource::ALL {
            if resource == Resource::Galleries {
                continue;
            }
            assert_eq!(create(resource).is_some(), resource.can_create(), "{resource:?}");
            assert_eq!(update(resource, 1).is_some(), resource.can_edit(), "{resource:?}");
            assert_eq!(delete(resource, 1).is_some(), resource.can_delete(), "{resource:?}");
        }
    }
}
