// tests/support/builders.rs
use clinic_cms::application::commands::{
    blog::CreateBlogPostCommand, services::CreateClinicServiceCommand,
};
use serde_json::{Value, json};

pub fn post_command(title: &str, published: bool) -> CreateBlogPostCommand {
    CreateBlogPostCommand::builder()
        .title(title)
        .content(format!("Body of {title}"))
        .published(published)
        .build()
        .unwrap()
}

pub fn service_command(title: &str) -> CreateClinicServiceCommand {
    CreateClinicServiceCommand {
        title: title.into(),
        description: format!("About {title}"),
        content: format!("Details of {title}"),
        ..Default::default()
    }
}

pub fn post_payload(title: &str, published: bool) -> Value {
    json!({
        "title": title,
        "content": format!("Body of {title}"),
        "excerpt": "Short summary",
        "published": published,
    })
}

pub fn service_payload(title: &str, order: i32) -> Value {
    json!({
        "title": title,
        "description": format!("About {title}"),
        "content": format!("Details of {title}"),
        "order": order,
    })
}
