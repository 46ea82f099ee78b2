//! Single binary web server: REST API over in-memory tournament documents.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post, put,
    web::{Bytes, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use racket_tournament_web::io::{
    fixtures_csv, import_players_csv, match_results_csv, players_csv, CsvImportSummary,
};
use racket_tournament_web::store::{DocumentStore, MemoryStore, StoreError};
use racket_tournament_web::{
    add_player, build_fixtures, parse_score_input, publish, remove_player, rename_category,
    update_match, update_player, update_settings, MatchAction, MatchStatus, PlayerDetails,
    PlayerSlot, Tournament, TournamentId, TournamentSettings, TournamentStatus,
    STANDARD_CATEGORIES, STANDARD_EVENT_TYPES,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Per-tournament entry: tournament document + last activity time (for auto-cleanup).
struct TournamentEntry {
    tournament: Tournament,
    last_activity: Instant,
}

/// In-memory state: many tournaments by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<TournamentId, TournamentEntry>>>;

/// Backup target for sync/restore; documents survive tournament cleanup.
type BackupStore = Data<RwLock<MemoryStore>>;

/// Inactivity threshold: tournaments not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Standard event types and categories offered when configuring a tournament.
#[derive(serde::Serialize)]
struct CatalogResponse {
    types: Vec<&'static str>,
    categories: Vec<&'static str>,
}

/// One row of the tournament list.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct TournamentSummary {
    id: TournamentId,
    name: String,
    created_at: DateTime<Utc>,
    status: TournamentStatus,
    is_published: bool,
    player_count: usize,
}

#[derive(serde::Serialize)]
struct ImportResponse<'a> {
    summary: CsvImportSummary,
    tournament: &'a Tournament,
}

#[derive(Deserialize)]
struct CreateTournamentBody {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerBody {
    name: String,
    mobile_number: String,
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    fee_paid: bool,
}

#[derive(Deserialize)]
struct RenameCategoryBody {
    from: String,
    to: String,
}

#[derive(Deserialize)]
struct GenerateFixturesBody {
    category: String,
    #[serde(rename = "type")]
    event_type: String,
    /// Overwrite an existing fixture for the same (category, type) pair.
    #[serde(default)]
    replace: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusChangeBody {
    status: MatchStatus,
    #[serde(default = "default_actor")]
    changed_by: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoreEditBody {
    player: PlayerSlot,
    /// Raw score text; empty clears the score.
    #[serde(default)]
    value: String,
    #[serde(default = "default_actor")]
    changed_by: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestoreBody {
    remote_id: String,
}

fn default_actor() -> String {
    "admin".to_string()
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segments: tournament id and player id (e.g. /api/tournaments/{id}/players/{player_id})
#[derive(Deserialize)]
struct TournamentPlayerPath {
    id: TournamentId,
    player_id: Uuid,
}

/// Path segments: tournament id and match id (e.g. /api/tournaments/{id}/matches/{match_id}/status)
#[derive(Deserialize)]
struct TournamentMatchPath {
    id: TournamentId,
    match_id: Uuid,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "racket-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Standard options for tournament setup forms.
#[get("/api/catalog")]
async fn api_catalog() -> impl Responder {
    HttpResponse::Ok().json(CatalogResponse {
        types: STANDARD_EVENT_TYPES.to_vec(),
        categories: STANDARD_CATEGORIES.to_vec(),
    })
}

/// Create a new draft tournament (client stores id for subsequent requests).
#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState, body: Json<CreateTournamentBody>) -> HttpResponse {
    let tournament = Tournament::new(body.name.trim());
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament: tournament.clone(),
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(tournament)
}

/// List all tournaments (summaries only, oldest first).
#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut summaries: Vec<TournamentSummary> = g
        .values()
        .map(|entry| TournamentSummary {
            id: entry.tournament.id,
            name: entry.tournament.settings.name.clone(),
            created_at: entry.tournament.created_at,
            status: entry.tournament.status,
            is_published: entry.tournament.is_published,
            player_count: entry.tournament.players.len(),
        })
        .collect();
    summaries.sort_by_key(|s| s.created_at);
    HttpResponse::Ok().json(summaries)
}

/// Get a tournament by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Delete a tournament.
#[delete("/api/tournaments/{id}")]
async fn api_delete_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Replace the tournament settings (name, event types, categories).
#[put("/api/tournaments/{id}/settings")]
async fn api_update_settings(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<TournamentSettings>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    entry.tournament = update_settings(&entry.tournament, body.into_inner());
    HttpResponse::Ok().json(&entry.tournament)
}

/// Rename a category across settings, players and fixtures.
#[put("/api/tournaments/{id}/categories/rename")]
async fn api_rename_category(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<RenameCategoryBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match rename_category(&entry.tournament, &body.from, &body.to) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Register a player.
#[post("/api/tournaments/{id}/players")]
async fn api_add_player(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let body = body.into_inner();
    let details = PlayerDetails {
        name: body.name,
        mobile_number: body.mobile_number,
        categories: body.categories,
        fee_paid: body.fee_paid,
    };
    match add_player(&entry.tournament, details) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Update a player's registration details.
#[put("/api/tournaments/{id}/players/{player_id}")]
async fn api_update_player(
    state: AppState,
    path: Path<TournamentPlayerPath>,
    body: Json<PlayerBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let body = body.into_inner();
    let details = PlayerDetails {
        name: body.name,
        mobile_number: body.mobile_number,
        categories: body.categories,
        fee_paid: body.fee_paid,
    };
    match update_player(&entry.tournament, path.player_id, details) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Remove a player from the roster (fixtures are left as generated).
#[delete("/api/tournaments/{id}/players/{player_id}")]
async fn api_remove_player(state: AppState, path: Path<TournamentPlayerPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match remove_player(&entry.tournament, path.player_id) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Bulk-import players from CSV text (body is the raw CSV).
#[post("/api/tournaments/{id}/players/import")]
async fn api_import_players(
    state: AppState,
    path: Path<TournamentPath>,
    body: Bytes,
) -> HttpResponse {
    let csv_text = match String::from_utf8(body.to_vec()) {
        Ok(text) => text,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Body must be UTF-8 CSV text" }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match import_players_csv(&entry.tournament, &csv_text) {
        Ok((updated, summary)) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(ImportResponse {
                summary,
                tournament: &entry.tournament,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Generate fixtures for one (category, type) pair.
///
/// Regenerating over an existing fixture discards its matches and history, so
/// that requires an explicit `replace: true`; otherwise 409.
#[post("/api/tournaments/{id}/fixtures")]
async fn api_generate_fixtures(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<GenerateFixturesBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    if entry
        .tournament
        .fixture(&body.category, &body.event_type)
        .is_some()
        && !body.replace
    {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": "Fixtures already exist for this category and type; pass replace=true to regenerate"
        }));
    }
    match build_fixtures(&entry.tournament, &body.category, &body.event_type) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Change the status of one match (walkovers and DQ normalize to Completed).
#[put("/api/tournaments/{id}/matches/{match_id}/status")]
async fn api_set_match_status(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<StatusChangeBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let action = MatchAction::SetStatus(body.status);
    match update_match(&entry.tournament, path.match_id, &action, &body.changed_by) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Edit one score field of one match ("" clears it).
#[put("/api/tournaments/{id}/matches/{match_id}/score")]
async fn api_set_match_score(
    state: AppState,
    path: Path<TournamentMatchPath>,
    body: Json<ScoreEditBody>,
) -> HttpResponse {
    let value = match parse_score_input(&body.value) {
        Ok(value) => value,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    let action = MatchAction::SetScore {
        slot: body.player,
        value,
    };
    match update_match(&entry.tournament, path.match_id, &action, &body.changed_by) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Full audit trail of one match.
#[get("/api/tournaments/{id}/matches/{match_id}/history")]
async fn api_match_history(state: AppState, path: Path<TournamentMatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match entry.tournament.find_match(path.match_id) {
        Some(m) => HttpResponse::Ok().json(&m.history),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "Match not found" })),
    }
}

/// Publish the tournament (400 with the first blocker if not ready).
#[post("/api/tournaments/{id}/publish")]
async fn api_publish_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match publish(&entry.tournament) {
        Ok(updated) => {
            entry.tournament = updated;
            HttpResponse::Ok().json(&entry.tournament)
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Save the tournament document to the backup store (create or update).
#[post("/api/tournaments/{id}/sync")]
async fn api_sync_tournament(
    state: AppState,
    store: BackupStore,
    path: Path<TournamentPath>,
) -> HttpResponse {
    // Snapshot under the registry lock, save outside it; the locks never nest.
    let (document, existing) = {
        let mut g = match state.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        let entry = match g.get_mut(&path.id) {
            Some(e) => e,
            None => {
                return HttpResponse::NotFound()
                    .json(serde_json::json!({ "error": "No tournament" }))
            }
        };
        entry.last_activity = Instant::now();
        (entry.tournament.clone(), entry.tournament.remote_id.clone())
    };

    let remote_id = {
        let mut s = match store.write() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        match s.save(&document, existing.as_deref()) {
            Ok(id) => id,
            Err(e) => {
                return HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.tournament.remote_id = Some(remote_id);
            HttpResponse::Ok().json(&entry.tournament)
        }
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    }
}

/// Load a tournament document from the backup store into the registry.
#[post("/api/tournaments/restore")]
async fn api_restore_tournament(
    state: AppState,
    store: BackupStore,
    body: Json<RestoreBody>,
) -> HttpResponse {
    let tournament = {
        let s = match store.read() {
            Ok(guard) => guard,
            Err(_) => return HttpResponse::InternalServerError().body("lock error"),
        };
        match s.load(&body.remote_id) {
            Ok(mut t) => {
                // Keep the store id so subsequent syncs update the same document.
                t.remote_id = Some(body.remote_id.clone());
                t
            }
            Err(StoreError::NotFound(_)) => {
                return HttpResponse::NotFound()
                    .json(serde_json::json!({ "error": "No stored tournament under that id" }))
            }
            Err(e) => {
                return HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": e.to_string() }))
            }
        }
    };

    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(
        tournament.id,
        TournamentEntry {
            tournament: tournament.clone(),
            last_activity: Instant::now(),
        },
    );
    HttpResponse::Ok().json(tournament)
}

/// Roster as CSV.
#[get("/api/tournaments/{id}/export/players.csv")]
async fn api_export_players(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match players_csv(&entry.tournament) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(text),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Group assignments as CSV.
#[get("/api/tournaments/{id}/export/fixtures.csv")]
async fn api_export_fixtures(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match fixtures_csv(&entry.tournament) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(text),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Match results as CSV.
#[get("/api/tournaments/{id}/export/results.csv")]
async fn api_export_results(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return HttpResponse::NotFound().json(serde_json::json!({ "error": "No tournament" })),
    };
    entry.last_activity = Instant::now();
    match match_results_csv(&entry.tournament) {
        Ok(text) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(text),
        Err(e) => {
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<TournamentId, TournamentEntry>::new()));
    let store = Data::new(RwLock::new(MemoryStore::new()));

    // Background task: every 30 minutes, remove tournaments inactive for 12+ hours
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
                log::info!("Cleaned up {} inactive tournament(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(store.clone())
            .service(api_health)
            .service(favicon)
            .service(api_catalog)
            .service(api_create_tournament)
            .service(api_list_tournaments)
            .service(api_restore_tournament)
            .service(api_get_tournament)
            .service(api_delete_tournament)
            .service(api_update_settings)
            .service(api_rename_category)
            .service(api_add_player)
            .service(api_update_player)
            .service(api_remove_player)
            .service(api_import_players)
            .service(api_generate_fixtures)
            .service(api_set_match_status)
            .service(api_set_match_score)
            .service(api_match_history)
            .service(api_publish_tournament)
            .service(api_sync_tournament)
            .service(api_export_players)
            .service(api_export_fixtures)
            .service(api_export_results)
    })
    .bind(bind)?
    .run()
    .await
}
