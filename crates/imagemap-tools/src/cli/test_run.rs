use crate::opt;
use anyhow::Error;
use imagemap_model::submission::Submission;

pub(crate) async fn score(o: opt::Score) -> Result<(), Error> {
    let service = o.service.build().await?;
    let question = service.load(o.question_id).await?;
    let points = service.compute_reached_points(&question, o.active_id, o.pass).await?;
    println!("{points}");
    Ok(())
}

pub(crate) async fn submit(o: opt::Submit) -> Result<(), Error> {
    let service = o.service.build().await?;
    let question = service.load(o.question_id).await?;
    let submission = Submission {
        active_id: o.active_id,
        pass: o.pass,
        selected_area: o.area,
    };
    let pass = service.record_submission(&question, submission).await?;
    tracing::info!(question_id = o.question_id, active_id = o.active_id, %pass, "stored answer");
    println!("Stored answer in pass {pass}");
    Ok(())
}
