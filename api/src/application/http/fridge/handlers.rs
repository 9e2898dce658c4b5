pub mod analyze_fridge;
