//! Client synchronizer against a live server

use std::sync::Arc;

use etpack_client::{
    ClientConfig, ClientError, Department, FormDescriptor, FormListSynchronizer, HttpClient,
    LocalStorage, MemoryStorage, WriteOutcome,
};
use etpack_server::{Config, Server, ServerState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

struct Running {
    base_url: String,
    state: ServerState,
    stop: Option<oneshot::Sender<()>>,
    task: tokio::task::JoinHandle<()>,
}

impl Running {
    async fn start() -> Self {
        let config = Config::with_port(0);
        let state = ServerState::new(config.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (stop, stopped) = oneshot::channel::<()>();
        let server = Server::with_state(config, state.clone());
        let task = tokio::spawn(async move {
            server
                .serve(listener, async {
                    let _ = stopped.await;
                })
                .await
                .unwrap();
        });

        Self {
            base_url,
            state,
            stop: Some(stop),
            task,
        }
    }

    async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.task.await.unwrap();
    }
}

fn form(name: &str) -> FormDescriptor {
    FormDescriptor::new(name, "倉管")
}

#[tokio::test]
async fn test_reorder_reaches_server_and_cache() {
    let server = Running::start().await;
    let http = Arc::new(HttpClient::new(&ClientConfig::new(server.base_url.as_str())).unwrap());
    let cache = Arc::new(MemoryStorage::new());

    let mut sync = FormListSynchronizer::new(Department::Printing, http.clone(), cache.clone())
        .with_defaults(vec![form("A"), form("B"), form("C")]);

    // Nothing stored yet: defaults
    assert!(sync.fetch_department_list().await.is_fallback());

    let persisted = sync.reorder(0, Some(2)).unwrap();
    assert_eq!(persisted.remote.settled().await, WriteOutcome::Written);

    let expected = vec![form("B"), form("C"), form("A")];
    assert_eq!(server.state.forms.read("printing"), expected);
    let remote = http.fetch_form_list("printing").await.unwrap();
    assert_eq!(remote.forms, expected);

    let cached = cache
        .get_item(&Department::Printing.form_cache_key())
        .unwrap()
        .unwrap();
    assert_eq!(serde_json::from_str::<Vec<FormDescriptor>>(&cached).unwrap(), expected);

    // A second view of the same department adopts the stored order
    let mut other = FormListSynchronizer::new(
        Department::Printing,
        http.clone(),
        Arc::new(MemoryStorage::new()),
    )
    .with_defaults(vec![form("A"), form("B"), form("C")]);
    let fetched = other.fetch_department_list().await;
    assert!(!fetched.is_fallback());
    assert_eq!(other.forms(), expected.as_slice());
    assert!(other.new_names().is_empty());

    server.shutdown().await;
}

#[tokio::test]
async fn test_inserted_form_is_tagged_new_on_refetch() {
    let server = Running::start().await;
    let http = Arc::new(HttpClient::new(&ClientConfig::new(server.base_url.as_str())).unwrap());

    let mut sync = FormListSynchronizer::new(
        Department::BagCutting,
        http.clone(),
        Arc::new(MemoryStorage::new()),
    );
    let persisted = sync.insert_form(FormDescriptor::new("出貨單", "倉管")).unwrap();
    persisted.remote.settled().await;

    let mut fresh = FormListSynchronizer::new(
        Department::BagCutting,
        http,
        Arc::new(MemoryStorage::new()),
    );
    fresh.fetch_department_list().await;

    assert_eq!(fresh.forms()[0].name, "出貨單");
    assert!(fresh.is_new("出貨單"));
    assert_eq!(fresh.new_names().len(), 1);
    assert_eq!(
        fresh.forms().len(),
        Department::BagCutting.default_forms().len() + 1
    );

    server.shutdown().await;
}

#[tokio::test]
async fn test_client_maps_bad_request() {
    let server = Running::start().await;
    let http = HttpClient::new(&ClientConfig::new(server.base_url.as_str())).unwrap();

    let err = http.fetch_form_list("  ").await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(msg) if msg == "Department is required"));

    server.shutdown().await;
}
