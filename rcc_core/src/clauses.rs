//! # Code References
//!
//! Clause, table and section strings attached to every check result so a
//! reader can find the governing provision.

/// IS 456:2000 Plain and Reinforced Concrete - Code of Practice
pub mod is456_ref {
    // Materials
    /// Grades of concrete
    pub const CONCRETE_GRADE: &str = "Clause 6.1";
    /// Minimum grade by exposure
    pub const MINIMUM_GRADE: &str = "Clause 6.1.2";
    /// Reinforcement grades
    pub const STEEL_GRADE: &str = "Clause 5.6";

    // Durability
    /// Nominal cover to meet durability
    pub const COVER: &str = "Clause 26.4.2";
    /// Cement content and water-cement ratio, Table 5
    pub const CEMENT_CONTENT: &str = "Clause 8.2.4.1";

    // Flexure
    /// Minimum and maximum tension reinforcement
    pub const MINIMUM_STEEL: &str = "Clause 26.5";
    pub const MAXIMUM_STEEL: &str = "Clause 26.5.1.1";
    /// Limit state of collapse: flexure
    pub const FLEXURE: &str = "Clause 38.1";

    // Shear
    pub const SHEAR: &str = "Clause 40";
    /// Maximum shear stress, Table 20
    pub const SHEAR_MAX: &str = "Clause 40.2.3";
    /// Design of shear reinforcement
    pub const SHEAR_REINFORCEMENT: &str = "Clause 40.4";

    // Serviceability
    /// Span to effective depth ratio
    pub const DEFLECTION: &str = "Clause 23.2";

    // Detailing
    pub const MIN_SPACING: &str = "Clause 26.3.2";
    pub const MAX_SPACING: &str = "Clause 26.3.3";
    pub const DEVELOPMENT_LENGTH: &str = "Clause 26.2.1";
}

/// SP 34:1987 Handbook on Concrete Reinforcement and Detailing
pub mod sp34_ref {
    pub const COVER: &str = "SP 34:1987, Section 4.1";
    pub const BAR_SPACING: &str = "SP 34:1987, Section 8.2.1";
    pub const ANCHORAGE: &str = "SP 34:1987, Section 4.3";
    pub const SPLICE_LOCATION: &str = "SP 34:1987, Section 4.4.1";
    pub const LAP_LENGTH: &str = "SP 34:1987, Section 4.4.2";
    pub const SPLICE_STAGGER: &str = "SP 34:1987, Section 4.4.2(c)";

    // Beams
    pub const BEAM_MIN_STEEL: &str = "SP 34:1987, Section 8.2.2.1";
    pub const BEAM_MAX_STEEL: &str = "SP 34:1987, Section 8.2.2.2";
    pub const SIDE_FACE: &str = "SP 34:1987, Section 8.2.4";

    // Columns
    pub const COLUMN_STEEL: &str = "SP 34:1987, Section 7.1.1";
    pub const COLUMN_BAR_COUNT: &str = "SP 34:1987, Section 7.1.2";
    pub const COLUMN_BAR_DIAMETER: &str = "SP 34:1987, Section 7.1.3";
    pub const COLUMN_BARS: &str = "SP 34:1987, Section 7.1.2, 7.1.3";
    pub const TIES: &str = "SP 34:1987, Section 7.2.6";
    pub const TIE_SPACING: &str = "SP 34:1987, Section 7.2.6.1";
    pub const TIE_DIAMETER: &str = "SP 34:1987, Section 7.2.6.2";

    // Slabs
    pub const SLAB_MIN_STEEL: &str = "SP 34:1987, Section 9.1";
    pub const SLAB_SPACING: &str = "SP 34:1987, Section 9.2.1";
    pub const SLAB_TORSION: &str = "SP 34:1987, Section 9.4.6";

    // Footings
    pub const FOOTING_COVER: &str = "SP 34:1987, Section 6.2";
    pub const DOWELS: &str = "SP 34:1987, Section 6.5.1.1";

    // Ductile detailing
    pub const DUCTILE_BEAM_STEEL: &str = "SP 34:1987, Section 12.1.1";
    pub const DUCTILE_STIRRUPS: &str = "SP 34:1987, Section 12.1.5";
    pub const CONFINEMENT: &str = "SP 34:1987, Section 12.2.3";
}
