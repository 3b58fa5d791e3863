
use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test, web};
use mockall::predicate::eq;
use portfolio_api::{
    entities::{
        contact::Contact,
        project::{ProjectWithImages, DEFAULT_PROJECT_STATUS},
        project_image::{ProjectImage, ProjectImageInsert},
        skill::DEFAULT_PROFICIENCY,
    },
    errors::AppError,
};
use serde_json::{json, Value};
use test_utils::*;

#[actix_rt::test]
async fn contact_submission_returns_201_and_stores_one_record() {
    let stored: Arc<Mutex<Vec<Contact>>> = Arc::new(Mutex::new(Vec::new()));
    let mut repos = MockRepos::new();

    let sink = stored.clone();
    repos.contacts
        .expect_create_contact()
        .times(1)
        .returning(move |insert| {
            let mut contacts = sink.lock().unwrap();
            let contact = contact_from_insert(contacts.len() as i64 + 1, insert);
            contacts.push(contact.clone());
            Ok(contact)
        });

    let source = stored.clone();
    repos.contacts
        .expect_list_contacts()
        .returning(move || Ok(source.lock().unwrap().clone()));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({"name": "A", "email": "a@b.com", "message": "hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Message sent successfully");

    let contacts = state.contact_handler.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "A");
    assert_eq!(contacts[0].email, "a@b.com");
    assert_eq!(contacts[0].message, "hi");
}

#[actix_rt::test]
async fn contact_without_message_returns_400_and_stores_nothing() {
    let mut repos = MockRepos::new();
    repos.contacts.expect_create_contact().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({"name": "A", "email": "a@b.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("message"));
    assert_eq!(body["details"][0]["field"], "message");
}

#[actix_rt::test]
async fn contact_with_nul_character_returns_400_and_stores_nothing() {
    let mut repos = MockRepos::new();
    repos.contacts.expect_create_contact().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({"name": "A", "email": "a@b.com", "message": "hi\u{0}there"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"][0]["field"], "message");
}

#[actix_rt::test]
async fn contact_with_blank_fields_returns_400() {
    let mut repos = MockRepos::new();
    repos.contacts.expect_create_contact().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({"name": "", "email": "a@b.com", "message": "   "}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["message", "name"]);
}

#[actix_rt::test]
async fn contact_with_malformed_email_returns_400() {
    let mut repos = MockRepos::new();
    repos.contacts.expect_create_contact().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .set_json(json!({"name": "A", "email": "not-an-email", "message": "hi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn malformed_json_returns_400_with_error_body() {
    let mut repos = MockRepos::new();
    repos.contacts.expect_create_contact().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_rt::test]
async fn create_project_returns_201_with_defaults() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_create_project()
        .withf(|insert| {
            insert.title == "T"
                && insert.description == "D"
                && insert.status == DEFAULT_PROJECT_STATUS
                && insert.technologies.is_empty()
        })
        .times(1)
        .returning(|insert| Ok(project_from_insert(1, insert)));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/projects")
        .set_json(json!({"title": "T", "description": "D"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["status"], "completed");
    assert_eq!(body["images"], json!([]));
    assert_eq!(body["technologies"], json!([]));
    assert!(body["link"].is_null());
    assert!(body["created_at"].is_string());
}

#[actix_rt::test]
async fn create_project_keeps_optional_fields() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_create_project()
        .times(1)
        .returning(|insert| Ok(project_from_insert(3, insert)));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/projects/")
        .set_json(json!({
            "title": "Portfolio",
            "description": "Personal site",
            "link": "https://example.com",
            "technologies": ["Rust", "actix-web"],
            "status": "in-progress"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["link"], "https://example.com");
    assert_eq!(body["technologies"], json!(["Rust", "actix-web"]));
    assert_eq!(body["status"], "in-progress");
}

#[actix_rt::test]
async fn create_project_without_title_returns_400() {
    let mut repos = MockRepos::new();
    repos.projects.expect_create_project().never();

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/projects")
        .set_json(json!({"description": "D"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"][0]["field"], "title");
}

#[actix_rt::test]
async fn list_projects_embeds_images_in_order() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_list_projects_with_images()
        .times(1)
        .returning(|| {
            Ok(vec![
                ProjectWithImages {
                    project: sample_project(1, "First"),
                    images: vec!["/media/first-1.png".into(), "https://cdn.example.com/first-2.png".into()],
                },
                ProjectWithImages {
                    project: sample_project(2, "Second"),
                    images: vec![],
                },
            ])
        });

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/projects").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let projects = body.as_array().unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0]["title"], "First");
    assert_eq!(
        projects[0]["images"],
        json!(["/media/first-1.png", "https://cdn.example.com/first-2.png"])
    );
    assert_eq!(projects[1]["images"], json!([]));
}

#[actix_rt::test]
async fn store_failure_returns_500_without_driver_details() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_list_projects_with_images()
        .returning(|| Err(AppError::StoreUnavailable("pool timed out".into())));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/projects").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Store unavailable"}));
}

#[actix_rt::test]
async fn list_skills_returns_empty_array() {
    let mut repos = MockRepos::new();
    repos.skills.expect_list_skills().returning(|| Ok(vec![]));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/skills").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_rt::test]
async fn list_skills_returns_all_fields() {
    let mut repos = MockRepos::new();
    repos.skills.expect_list_skills().returning(|| {
        Ok(vec![
            sample_skill(1, "Rust", "Language", 90),
            sample_skill(2, "Docker", "Tool", 70),
        ])
    });

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/skills").to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Rust", "category": "Language", "proficiency": 90},
            {"id": 2, "name": "Docker", "category": "Tool", "proficiency": 70}
        ])
    );
}

#[actix_rt::test]
async fn create_skill_defaults_proficiency() {
    let mut repos = MockRepos::new();
    repos.skills
        .expect_create_skill()
        .withf(|insert| insert.proficiency == DEFAULT_PROFICIENCY)
        .times(1)
        .returning(|insert| Ok(sample_skill(5, &insert.name, &insert.category, insert.proficiency)));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/skills")
        .set_json(json!({"name": "SQL", "category": "Language"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["proficiency"], 50);
    assert_eq!(body["id"], 5);
}

#[actix_rt::test]
async fn attaching_image_to_missing_project_surfaces_referential_error() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_create_project_image()
        .withf(|image| image.project_id == 42)
        .times(1)
        .returning(|image| {
            Err(AppError::ReferentialIntegrity(format!("Project {} does not exist", image.project_id)))
        });

    let state = repos.into_state();
    let result = state.project_handler
        .attach_image(ProjectImageInsert::new(42, "/media/shot.png"))
        .await;

    assert!(matches!(result, Err(AppError::ReferentialIntegrity(_))));
}

#[actix_rt::test]
async fn attaching_blank_image_is_rejected_before_the_store() {
    let mut repos = MockRepos::new();
    repos.projects.expect_create_project_image().never();

    let state = repos.into_state();
    let result = state.project_handler
        .attach_image(ProjectImageInsert::new(1, "  "))
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn attaching_image_returns_stored_row() {
    let mut repos = MockRepos::new();
    repos.projects
        .expect_create_project_image()
        .times(1)
        .returning(|image| {
            Ok(ProjectImage { id: 9, project_id: image.project_id, image: image.image.clone() })
        });
    repos.projects
        .expect_list_project_images()
        .with(eq(1))
        .returning(|project_id| {
            Ok(vec![ProjectImage { id: 9, project_id, image: "/media/shot.png".into() }])
        });

    let state = repos.into_state();
    let image = state.project_handler
        .attach_image(ProjectImageInsert::new(1, "/media/shot.png"))
        .await
        .unwrap();

    assert_eq!(image.id, 9);
    let images = state.project_handler.project_repo.list_project_images(1).await.unwrap();
    assert_eq!(images, vec![image]);
}

#[actix_rt::test]
async fn health_reports_database_status() {
    let mut repos = MockRepos::new();
    repos.health.expect_check_connection().times(1).returning(|| Ok(()));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
}

#[actix_rt::test]
async fn health_returns_503_when_database_is_down() {
    let mut repos = MockRepos::new();
    repos.health
        .expect_check_connection()
        .returning(|| Err(AppError::StoreUnavailable("connection refused".into())));

    let state = web::Data::new(repos.into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["database"], "Unavailable");
}

#[actix_rt::test]
async fn home_returns_banner() {
    let state = web::Data::new(MockRepos::new().into_state());
    let app = init_app!(state);

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["name"], TEST_APP_NAME);
}
