pub mod configuration;

pub mod manager {
    pub mod managererror;
    pub mod manager;
}

pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod piecewiselinear;
    }
    pub mod round;
}

pub mod metrics {
    pub mod kpi;
    pub mod density;
    pub mod aggregate;
    pub mod kpicache;
}

pub mod report {
    pub mod kpitable;
    pub mod chartseries;
}

pub mod sales {
    pub mod salesrecord;
    pub mod salesloader;
    pub mod salesseries;
}

pub mod sample {
    pub mod distributionsample;
    pub mod builtinsamples;
    pub mod samplemanager;
}
