pub mod histogram_plotter;
