pub mod track_vis;
