use imagemap_config::imagemap::ImageMapConfig;
use imagemap_core::imagemap::ImageMapService;
use imagemap_model::area::{AnswerArea, AreaShape};
use imagemap_model::question::ImageMapQuestion;
use imagemap_model::working_time::WorkingTime;
use imagemap_test_helpers::{SqliteDb, TestAssets};
use imagemap_utils::assets::file_system::FileSystemStore;

#[allow(dead_code)]
pub struct TestContext {
    pub service: ImageMapService<FileSystemStore>,
    pub assets: TestAssets,
    _db: SqliteDb,
}

pub async fn setup() -> TestContext {
    setup_with_config(ImageMapConfig::default()).await
}

#[allow(dead_code)]
pub async fn setup_with_config(config: ImageMapConfig) -> TestContext {
    let db = SqliteDb::new().unwrap();
    let conn = imagemap_test_helpers::connect(&db).await.unwrap();
    let assets = TestAssets::new().unwrap();
    let service = ImageMapService::new(conn, assets.store(), config);
    TestContext {
        service,
        assets,
        _db: db,
    }
}

pub fn harbour_question(pool_id: i32) -> ImageMapQuestion {
    let mut question = ImageMapQuestion::new(pool_id);
    question.title = "Harbour".to_owned();
    question.comment = "Landmarks".to_owned();
    question.author = "Tester".to_owned();
    question.owner = 3;
    question.question_text = "Where is the lighthouse?".to_owned();
    question.working_time = WorkingTime::new(0, 2, 30).unwrap();
    question.set_image_filename("harbour map.png");
    question
        .areas
        .push(AnswerArea::new("Lighthouse", 5.0, AreaShape::Rectangle, "10,10,50,50"));
    question
        .areas
        .push(AnswerArea::new("Buoy", 2.0, AreaShape::Ellipse, "80,80,12"));
    question
}
