mod school_dto;

pub use school_dto::{CreateSchoolDto, DistanceQuery, RankedSchoolDto, SchoolResponseDto};
