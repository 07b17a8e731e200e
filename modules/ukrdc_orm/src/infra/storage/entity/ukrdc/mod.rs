//! Main clinical repository (UKRDC)
//!
//! `patient_record` is the root aggregate; every clinical table hangs off it
//! by `pid`, either directly or through `patient`, `lab_order` or `survey`.

pub mod address;
pub mod allergy;
pub mod cause_of_death;
pub mod clinical_relationship;
pub mod code;
pub mod code_exclusion;
pub mod code_map;
pub mod contact_detail;
pub mod diagnosis;
pub mod dialysis_session;
pub mod document;
pub mod encounter;
pub mod event_control;
pub mod facility;
pub mod facility_relationship;
pub mod family_doctor;
pub mod family_history;
pub mod file;
pub mod gp_info;
pub mod lab_order;
pub mod level;
pub mod locations;
pub mod medication;
pub mod modality_codes;
pub mod name;
pub mod observation;
pub mod opt_out;
pub mod patient;
pub mod patient_number;
pub mod patient_record;
pub mod pkb_link;
pub mod procedure;
pub mod program_membership;
pub mod pv_data;
pub mod pv_delete;
pub mod question;
pub mod renal_diagnosis;
pub mod result_item;
pub mod rr_codes;
pub mod rr_data_definition;
pub mod satellite_map;
pub mod score;
pub mod social_history;
pub mod survey;
pub mod transplant;
pub mod transplant_list;
pub mod treatment;
pub mod validation_error;
pub mod value_exclusion;
pub mod vascular_access;
