//! Transaction management utilities.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction.
    ///
    /// The write lock is taken up front, so every check performed inside the
    /// transaction still holds when its writes are committed. Dropping the
    /// returned transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired within the busy timeout.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tablebook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/tablebook.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let pending = Database::list_by_status(&tx, tablebook::Status::Booked).unwrap();
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::database::test_util::{create_test_database, sample_reservation};
    use crate::database::Database;

    #[test]
    fn test_commit_persists_writes() {
        let mut db = create_test_database();
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();

        let tx = db.begin_transaction().unwrap();
        Database::insert_reservation(&tx, &sample_reservation(date, "19:00", 4)).unwrap();
        tx.commit().unwrap();

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert_eq!(all.len(), 1);
    }

    #[test]
    fn test_drop_rolls_back() {
        let mut db = create_test_database();
        let date = NaiveDate::from_ymd_opt(2099, 1, 1).unwrap();

        {
            let tx = db.begin_transaction().unwrap();
            Database::insert_reservation(&tx, &sample_reservation(date, "19:00", 4)).unwrap();
        }

        let all = Database::list_all_reservations(db.connection()).unwrap();
        assert!(all.is_empty());
    }
}
