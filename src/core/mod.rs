//! Core-Domänentypen: Checkpoints, Route, Kachelraster, Streckendaten.

pub mod object;
pub mod progress;
/// Herzstück des Streckenmodells
///
/// Die Route ist die geordnete, ggf. geschlossene Folge der Checkpoints,
/// die die Ideallinie einer Strecke definiert. Editor (Aufbau per Klick),
/// Persistenz (sortierter Neuaufbau aus Datensätzen) und Spiel-Laufzeit
/// (Rundenzählung, KI-Wegpunkte) arbeiten alle gegen dieses Modul.
pub mod route;
pub mod target_node;
pub mod tile;
pub mod track_data;
pub mod validation;

pub use object::TrackObject;
pub use progress::{ProgressEvent, RouteProgress};
pub use route::Route;
pub use target_node::{TargetNode, DEFAULT_TARGET_RADIUS};
pub use tile::{ComputerHint, TileMap, TrackTile, TILE_SIZE};
pub use track_data::{RouteClick, TrackData};
pub use validation::{validate_track, TrackWarning};
