//! Transaction management utilities.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction.
    ///
    /// The write lock is taken up front, so a read-validate-write sequence
    /// inside the transaction cannot interleave with another writer. The
    /// transaction rolls back when dropped without a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired within the busy
    /// timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use roombook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/reservations.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let all = Database::list_all_reservations(&tx).unwrap();
    /// tx.commit().unwrap();
    /// # let _ = all;
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}
