//! Single binary web server: JSON API for brackets and the spinner, track data under /data.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, DATA_DIR,
//! TRACKS_PATH, TRACKS_FALLBACK_PATH.

use actix_files::Files;
use actix_web::{
    delete, get, post,
    web::{Data, Json, Path, Query},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use party_picker::{
    create_sample_players, create_spin_animation, default_picker_items, load_tracks,
    parse_players_csv, simulate_matches, spin, Bracket, BracketFormat, PickerItem, Player,
    ServerConfig, SpinAnimation, TrackSource, DEFAULT_SPINS,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a stored bracket.
type BracketId = Uuid;

/// Per-bracket entry: bracket data + last activity time (for auto-cleanup).
struct BracketEntry {
    view: BracketView,
    last_activity: Instant,
}

/// What the client sees for a stored bracket.
#[derive(Clone, Serialize)]
struct BracketView {
    id: BracketId,
    format: BracketFormat,
    created_at: DateTime<Utc>,
    bracket: Bracket,
}

/// In-memory state: generated brackets by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<BracketId, BracketEntry>>>;

/// Track loader chain, built once from config.
type Sources = Data<Vec<TrackSource>>;

/// Inactivity threshold: brackets not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Upper bound for generated sample rosters.
const MAX_SAMPLE_PLAYERS: usize = 256;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct CreateBracketBody {
    #[serde(default)]
    format: BracketFormat,
    #[serde(default)]
    players: Vec<Player>,
    /// Roster as CSV text (`id,name,seed`); used when `players` is empty.
    #[serde(default)]
    players_csv: Option<String>,
    /// Generate this many sample players; used when neither of the above is given.
    #[serde(default)]
    sample_count: Option<usize>,
}

#[derive(Deserialize)]
struct SampleQuery {
    #[serde(default = "default_sample_count")]
    count: usize,
}

fn default_sample_count() -> usize {
    8
}

#[derive(Deserialize)]
struct TracksQuery {
    #[serde(default)]
    include_bonus: bool,
}

#[derive(Deserialize)]
struct SpinBody {
    /// Wheel contents; the default character wheel when absent.
    #[serde(default)]
    items: Option<Vec<PickerItem>>,
    #[serde(default)]
    spins: Option<u32>,
    #[serde(default)]
    duration_ms: Option<u32>,
}

#[derive(Serialize)]
struct SpinResponse {
    selected: Option<PickerItem>,
    index: Option<usize>,
    rotation: f64,
    animation: SpinAnimation,
}

/// Path segment: bracket id (e.g. /api/brackets/{id})
#[derive(Deserialize)]
struct BracketPath {
    id: BracketId,
}

fn error_json(message: impl std::fmt::Display) -> serde_json::Value {
    serde_json::json!({ "error": message.to_string() })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "party-picker",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Sample roster with seeds 1..count.
#[get("/api/players/sample")]
async fn api_sample_players(query: Query<SampleQuery>) -> HttpResponse {
    let count = query.count.min(MAX_SAMPLE_PLAYERS);
    HttpResponse::Ok().json(create_sample_players(count))
}

/// Generate and store a bracket (returns it with id; client keeps id for later requests).
#[post("/api/brackets")]
async fn api_create_bracket(state: AppState, body: Json<CreateBracketBody>) -> HttpResponse {
    let body = body.into_inner();
    let players = if !body.players.is_empty() {
        body.players
    } else if let Some(csv) = body.players_csv.as_deref() {
        match parse_players_csv(csv.as_bytes()) {
            Ok(players) => players,
            Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
        }
    } else {
        create_sample_players(body.sample_count.unwrap_or(0).min(MAX_SAMPLE_PLAYERS))
    };

    let bracket = match body.format.generate(&players) {
        Ok(bracket) => bracket,
        Err(e) => return HttpResponse::BadRequest().json(error_json(e)),
    };
    let view = BracketView {
        id: Uuid::new_v4(),
        format: body.format,
        created_at: Utc::now(),
        bracket,
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    log::info!(
        "Created {:?} bracket {} with {} players",
        view.format,
        view.id,
        players.len()
    );
    g.insert(
        view.id,
        BracketEntry {
            view: view.clone(),
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(view)
}

/// Get a bracket by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/brackets/{id}")]
async fn api_get_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.view)
        }
        None => HttpResponse::NotFound().json(error_json("No bracket")),
    }
}

/// Forget a bracket.
#[delete("/api/brackets/{id}")]
async fn api_delete_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().json(error_json("No bracket")),
    }
}

/// Simulate round-1 results (stronger seed usually wins) and store the new matches.
#[post("/api/brackets/{id}/simulate")]
async fn api_simulate_bracket(state: AppState, path: Path<BracketPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(error_json("No bracket")),
    };
    entry.last_activity = Instant::now();
    let bracket = &mut entry.view.bracket;
    bracket.matches = simulate_matches(&bracket.matches, &mut rand::thread_rng());
    HttpResponse::Ok().json(&entry.view)
}

/// Default character wheel.
#[get("/api/picker/items")]
async fn api_picker_items() -> HttpResponse {
    HttpResponse::Ok().json(default_picker_items())
}

/// Track wheel, loaded through the fallback chain. Never fails; may be empty.
#[get("/api/picker/tracks")]
async fn api_picker_tracks(sources: Sources, query: Query<TracksQuery>) -> HttpResponse {
    let items = load_tracks(&sources, query.include_bonus).await;
    HttpResponse::Ok().json(items)
}

/// Spin the wheel: weighted pick plus the rotation that lands on it.
#[post("/api/picker/spin")]
async fn api_picker_spin(body: Json<SpinBody>) -> HttpResponse {
    let body = body.into_inner();
    let items = body.items.unwrap_or_else(default_picker_items);
    let (index, state) = spin(
        &items,
        body.spins.unwrap_or(DEFAULT_SPINS),
        &mut rand::thread_rng(),
    );
    let animation = body
        .duration_ms
        .map(create_spin_animation)
        .unwrap_or_default();
    HttpResponse::Ok().json(SpinResponse {
        selected: state.selected_item,
        index,
        rotation: state.rotation,
        animation,
    })
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);
    log::info!(
        "Track data: {} (fallback {})",
        config.tracks_path.display(),
        config.tracks_fallback_path.display()
    );

    let state = Data::new(RwLock::new(HashMap::<BracketId, BracketEntry>::new()));
    let sources: Sources = Data::new(config.track_sources());
    let data_dir = config.data_dir.clone();

    // Background task: every 30 minutes, remove brackets inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive bracket(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(sources.clone())
            .service(api_health)
            .service(favicon)
            .service(api_sample_players)
            .service(api_create_bracket)
            .service(api_get_bracket)
            .service(api_delete_bracket)
            .service(api_simulate_bracket)
            .service(api_picker_items)
            .service(api_picker_tracks)
            .service(api_picker_spin)
            .service(Files::new("/data", data_dir.clone()))
    })
    .bind(bind)?
    .run()
    .await
}
