use sea_orm::{DbErr, TransactionError};
use std::error::Error;

/// Collapses the connection/transaction split of [`TransactionError`] into the error type the
/// transaction body returns.
pub trait FlattenTransactionResultExt<T> {
    fn flatten_res(self) -> T;
}

impl<T, E> FlattenTransactionResultExt<Result<T, E>> for Result<T, TransactionError<E>>
where
    E: From<DbErr> + Error,
{
    fn flatten_res(self) -> Result<T, E> {
        self.map_err(|err| match err {
            TransactionError::Connection(err) => err.into(),
            TransactionError::Transaction(err) => err,
        })
    }
}

/// Turns an update that touched no rows into [`DbErr::RecordNotFound`].
pub trait RequireAffected {
    fn require_affected(self, what: &str) -> Result<u64, DbErr>;
}

impl RequireAffected for Result<u64, DbErr> {
    fn require_affected(self, what: &str) -> Result<u64, DbErr> {
        match self? {
            0 => Err(DbErr::RecordNotFound(format!("{what} not found"))),
            rows => Ok(rows),
        }
    }
}
