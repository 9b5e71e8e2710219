//! Rally2D Track Editor — Kernbibliothek.
//! Streckendatenmodell, Routen-Logik und XML-Persistenz als Library
//! exportiert für Editor-Frontends, die Spiel-Laufzeit und Tests.

pub mod core;
pub mod shared;
pub mod xml;

pub use core::{
    validate_track, ComputerHint, ProgressEvent, Route, RouteClick, RouteProgress, TargetNode,
    TileMap, TrackData, TrackObject, TrackTile, TrackWarning,
};
pub use core::{DEFAULT_TARGET_RADIUS, TILE_SIZE};
pub use shared::EditorOptions;
pub use xml::{load_track_file, parse_track, save_track_file, write_track};
