//! Connection bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Configure connection pragmas required by core behavior.
//! - Trigger schema migrations and default-account seeding before returning
//!   a usable connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - Returned connections have migrations fully applied.
//! - The `admin` and `manager` accounts exist on every returned connection.

use super::migrations::apply_migrations;
use super::DbResult;
use log::{error, info};
use rusqlite::{params, Connection};
use std::path::Path;
use std::time::{Duration, Instant};

/// Fixed administrative accounts seeded at first use.
const SEED_ACCOUNTS: &[(&str, &str, &str)] = &[
    ("admin", "admin123", "ADMIN"),
    ("manager", "manager123", "MANAGER"),
];

/// Opens a SQLite database file and prepares it for use.
///
/// # Side effects
/// - Applies pending migrations and seeds default accounts.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file");

    let mut conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=file duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database and prepares it for use.
///
/// # Side effects
/// - Applies pending migrations and seeds default accounts.
/// - Emits `db_open` logging events with duration and status.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let mut conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&mut conn) {
        Ok(()) => {
            info!(
                "event=db_open module=db status=ok mode=memory duration_ms={}",
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=memory duration_ms={} error_code=db_bootstrap_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn bootstrap_connection(conn: &mut Connection) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    seed_default_accounts(conn)?;
    Ok(())
}

/// Inserts the fixed admin/manager accounts when they are absent.
///
/// Idempotent by existence query, so externally changed passwords survive
/// subsequent opens. Seeded accounts carry no employee link.
fn seed_default_accounts(conn: &Connection) -> DbResult<()> {
    for (username, password, role) in SEED_ACCOUNTS {
        let exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM accounts WHERE username = ?1;",
            [username],
            |row| row.get(0),
        )?;
        if exists == 0 {
            conn.execute(
                "INSERT INTO accounts (username, password, role, employee_id)
                 VALUES (?1, ?2, ?3, NULL);",
                params![username, password, role],
            )?;
            info!("event=account_seed module=db status=ok username={username} role={role}");
        }
    }
    Ok(())
}
