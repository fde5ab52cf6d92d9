mod common;

use crate::common::{harbour_question, setup};
use imagemap_core::imagemap::error::ImageMapError;
use imagemap_core::imagemap::image_location;
use imagemap_db::question::{header, page};
use imagemap_db::sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use imagemap_entity::test::test_question;
use imagemap_model::area::{AnswerArea, AreaShape};
use imagemap_model::question::ImageMapQuestion;
use imagemap_utils::assets::AssetStore;
use test_log::test;

#[test(tokio::test)]
async fn test_persist_and_load() {
    let ctx = setup().await;
    let mut question = harbour_question(2);

    let id = ctx.service.persist(&mut question, None).await.unwrap();
    assert_eq!(question.id, Some(id));
    assert!(question.created_at.is_some());

    let loaded = ctx.service.load(id).await.unwrap();
    assert_eq!(loaded, question);
    assert_eq!(loaded.image_filename(), "harbour_map.png");

    let row = header::Query::get_by_id(ctx.service.conn(), id).await.unwrap().unwrap();
    assert!((row.points - 5.0).abs() < f64::EPSILON);
    assert!(row.complete);
    assert_eq!(row.working_time, "00:02:30");

    let page = page::Query::get_by_question(ctx.service.conn(), id).await.unwrap().unwrap();
    assert_eq!(
        page.content,
        format!(r#"<PageObject><PageContent><Question QRef="il__qst_{id}"/></PageContent></PageObject>"#)
    );
}

#[test(tokio::test)]
async fn test_update_replaces_areas() {
    let ctx = setup().await;
    let mut question = harbour_question(2);
    let id = ctx.service.persist(&mut question, None).await.unwrap();

    question.areas.remove_at(0).unwrap();
    question
        .areas
        .insert_at(0, AnswerArea::new("Pier", 1.0, AreaShape::Polygon, "0,0,4,0,4,4"));
    question.title = "Harbour at night".to_owned();
    assert_eq!(ctx.service.persist(&mut question, None).await.unwrap(), id);

    let loaded = ctx.service.load(id).await.unwrap();
    assert_eq!(loaded.title, "Harbour at night");
    let texts: Vec<_> = loaded.areas.iter().map(|area| area.text.as_str()).collect();
    assert_eq!(texts, ["Pier", "Buoy"]);

    let row = header::Query::get_by_id(ctx.service.conn(), id).await.unwrap().unwrap();
    assert!((row.points - 2.0).abs() < f64::EPSILON);
}

#[test(tokio::test)]
async fn test_incomplete_question() {
    let ctx = setup().await;
    let mut question = harbour_question(2);
    question.areas.clear();

    let id = ctx.service.persist(&mut question, None).await.unwrap();
    let row = header::Query::get_by_id(ctx.service.conn(), id).await.unwrap().unwrap();
    assert!(!row.complete);
    assert!(row.points.abs() < f64::EPSILON);
    assert!(ctx.service.load(id).await.unwrap().areas.is_empty());
}

#[test(tokio::test)]
async fn test_load_missing() {
    let ctx = setup().await;
    assert!(matches!(ctx.service.load(404).await, Err(ImageMapError::NotFound(404))));
}

#[test(tokio::test)]
async fn test_update_deleted_question() {
    let ctx = setup().await;
    let mut question = harbour_question(2);
    question.id = Some(404);

    let res = ctx.service.persist(&mut question, None).await;
    assert!(matches!(res, Err(ImageMapError::Database(DbErr::RecordNotUpdated))));
}

#[test(tokio::test)]
async fn test_store_image() {
    let ctx = setup().await;
    let mut question = harbour_question(2);

    let unsaved = ctx.service.store_image(&mut question, "new map.png", b"png").await;
    assert!(matches!(unsaved, Err(ImageMapError::NotPersisted)));

    let id = ctx.service.persist(&mut question, None).await.unwrap();
    ctx.service
        .store_image(&mut question, "new map.png", b"png")
        .await
        .unwrap();
    assert_eq!(question.image_filename(), "new_map.png");
    assert!(ctx.assets.root().join(format!("2/{id}/images/new_map.png")).is_file());

    let location = image_location(&question).unwrap();
    assert_eq!(ctx.service.assets().load(&location).await.unwrap(), b"png");

    let invalid = ctx.service.store_image(&mut question, "../escape.png", b"png").await;
    assert!(matches!(invalid, Err(ImageMapError::Asset(_))));
    assert_eq!(question.image_filename(), "new_map.png");
}

#[test(tokio::test)]
async fn test_create_in_test() {
    let ctx = setup().await;
    let mut first = harbour_question(2);
    first.test_id = Some(30);
    let first_id = ctx.service.persist(&mut first, None).await.unwrap();
    let mut second = harbour_question(2);
    second.test_id = Some(30);
    let second_id = ctx.service.persist(&mut second, None).await.unwrap();

    // Updates do not link again
    ctx.service.persist(&mut first, None).await.unwrap();

    let links = test_question::Entity::find()
        .filter(test_question::Column::TestId.eq(30))
        .order_by_asc(test_question::Column::Sequence)
        .all(ctx.service.conn())
        .await
        .unwrap();
    let linked: Vec<_> = links.iter().map(|link| (link.question_id, link.sequence)).collect();
    assert_eq!(linked, [(first_id, 0), (second_id, 1)]);
}

#[test(tokio::test)]
async fn test_create_from_json_keeps_round_trip() {
    let ctx = setup().await;
    let mut question: ImageMapQuestion = serde_json::from_str(
        r#"{"pool_id": 2, "title": "Harbour", "author": "Tester", "owner": 3,
            "question_text": "Where?", "image_filename": "harbour map.png",
            "areas": [{"text": "Lighthouse", "points": 5.0, "shape": "rectangle", "coords": "10,10,50,50"}]}"#,
    )
    .unwrap();

    let id = ctx.service.persist(&mut question, None).await.unwrap();
    let loaded = ctx.service.load(id).await.unwrap();
    assert_eq!(loaded.image_filename(), "harbour_map.png");
    assert_eq!(loaded, question);
}
