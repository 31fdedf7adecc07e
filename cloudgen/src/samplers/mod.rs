pub mod size_sampler;
