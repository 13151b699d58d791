pub mod symetric;
