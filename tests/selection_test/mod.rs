mod executive;
mod properties;
mod scenarios;
