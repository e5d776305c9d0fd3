use crate::config::config::Config;
use deadpool::managed::Object;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::{
    pooled_connection::{deadpool::Pool, AsyncDieselConnectionManager},
    AsyncPgConnection,
};
use log::error;
use openssl::ssl::{SslConnector, SslMethod};
use postgres_openssl::MakeTlsConnector;
use thiserror::Error;

pub type DBPool = deadpool::managed::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;
pub type DBConn = Object<AsyncDieselConnectionManager<AsyncPgConnection>>;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("could not get database connection from pool: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::deadpool::PoolError),
    #[error("error executing query: {0}")]
    QueryError(#[from] DieselError),
    #[error("could not build database pool: {0}")]
    PoolBuildError(String),
    #[error("could not run migrations: {0}")]
    MigrationError(String),
}

impl DbError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            DbError::QueryError(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _))
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            DbError::QueryError(DieselError::DatabaseError(
                DatabaseErrorKind::ForeignKeyViolation,
                _
            ))
        )
    }
}

/// Handle over the connection pool. Queries for each table live in the
/// sibling repository modules as further `impl Database` blocks.
pub struct Database {
    pool: DBPool,
}

impl Database {
    /// Builds the pool without opening any connection; connections are
    /// established lazily on first checkout.
    pub fn new(config: &Config) -> Result<Self, DbError> {
        let manager = match config.database_ca_file.clone() {
            Some(ca_file) => AsyncDieselConnectionManager::<AsyncPgConnection>::new_with_setup(
                config.database_url.clone(),
                move |url| Box::pin(Self::establish_tls(url, ca_file.clone())),
            ),
            None => AsyncDieselConnectionManager::<AsyncPgConnection>::new(
                config.database_url.clone(),
            ),
        };
        let pool = Pool::builder(manager)
            .max_size(config.database_pool_max_size)
            .build()
            .map_err(|e| DbError::PoolBuildError(e.to_string()))?;
        Ok(Database { pool })
    }

    async fn establish_tls(database_url: &str, ca_file: String) -> ConnectionResult<AsyncPgConnection> {
        let mut builder = SslConnector::builder(SslMethod::tls())
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        builder
            .set_ca_file(&ca_file)
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        let connector = MakeTlsConnector::new(builder.build());
        let (client, connection) = tokio_postgres::connect(database_url, connector)
            .await
            .map_err(|e| ConnectionError::BadConnection(e.to_string()))?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("database connection error: {e}");
            }
        });
        AsyncPgConnection::try_from(client).await
    }

    pub(crate) async fn get_db_conn(&self) -> Result<DBConn, DbError> {
        self.pool.get().await.map_err(DbError::PoolError)
    }
}
