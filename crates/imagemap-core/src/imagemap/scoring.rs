use crate::imagemap::error::ImageMapError;
use crate::imagemap::ImageMapService;
use imagemap_db::assessment_log;
use imagemap_db::test::{active, solution};
use imagemap_db::util::FlattenTransactionResultExt;
use imagemap_model::question::ImageMapQuestion;
use imagemap_model::submission::Submission;
use imagemap_utils::assets::AssetStore;
use sea_orm::{DbErr, TransactionTrait};
use tracing::instrument;

const LOG_ENTERED_VALUES: &str = "user entered values";
const LOG_NOT_ENTERED_VALUES: &str = "user did not enter values";

impl<A: AssetStore + Sync> ImageMapService<A> {
    /// Points the learner reached in the given pass, or in the last pass they answered in.
    #[instrument(skip(self, question), fields(question_id = ?question.id))]
    pub async fn compute_reached_points(
        &self,
        question: &ImageMapQuestion,
        active_id: i32,
        pass: Option<i32>,
    ) -> Result<f64, ImageMapError> {
        let question_id = question.id.ok_or(ImageMapError::NotPersisted)?;
        let pass = match pass {
            Some(pass) => pass,
            None => solution::Query::max_pass(&self.conn, active_id, question_id)
                .await?
                .unwrap_or(0),
        };

        let values = solution::Query::load_values(&self.conn, active_id, question_id, pass).await?;
        let selections: Vec<usize> = values
            .iter()
            .filter_map(|value| match value.trim().parse() {
                Ok(order) => Some(order),
                Err(_) => {
                    tracing::debug!(%value, "ignoring stored value that is not an area order");
                    None
                }
            })
            .collect();

        let points = question.points_for_selections(&selections);
        tracing::debug!(%pass, ?selections, points, "computed reached points");
        Ok(points)
    }

    /// Replaces the learner's stored answer for the pass with the selected area. Returns the pass
    /// the answer was stored in.
    #[instrument(skip(self, question), fields(question_id = ?question.id))]
    pub async fn record_submission(
        &self,
        question: &ImageMapQuestion,
        submission: Submission,
    ) -> Result<i32, ImageMapError> {
        let question_id = question.id.ok_or(ImageMapError::NotPersisted)?;
        let Submission {
            active_id,
            pass,
            selected_area,
        } = submission;

        let len = question.areas.len();
        if let Some(index) = selected_area
            && index >= len
        {
            return Err(ImageMapError::InvalidSelection { index, len });
        }

        let pass = match pass {
            Some(pass) => pass,
            None => active::Query::current_pass(&self.conn, active_id)
                .await?
                .ok_or(ImageMapError::UnknownAttempt(active_id))?,
        };

        let value = selected_area.map(|index| index.to_string());
        let log_message = self.config.assessment_logging.then_some(if value.is_some() {
            LOG_ENTERED_VALUES
        } else {
            LOG_NOT_ENTERED_VALUES
        });

        self.conn
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    solution::Mutation::replace(txn, active_id, question_id, pass, value).await?;
                    if let Some(message) = log_message {
                        assessment_log::Mutation::log_action(txn, active_id, question_id, message).await?;
                    }
                    Ok(())
                })
            })
            .await
            .flatten_res()?;
        Ok(pass)
    }
}
