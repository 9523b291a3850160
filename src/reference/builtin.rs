//! Built-in reference data: JSPE 2000 cross-sectional growth standards.
//!
//! LMS parameters for height and weight, ages 0-17.5 years (quarterly to 2y,
//! then half-yearly). Source: The Japanese Society for Pediatric
//! Endocrinology, Tables 2 and 3 (2000 National Growth Survey on Preschool
//! Children and School Health Statistics Research).

use crate::reference::table::LmsRow;

/// Reference set identifier written into exports.
pub const BUILTIN_SOURCE: &str = "jspe-2000-lms";

pub(crate) const MALE_HEIGHT: [LmsRow; 40] = [
    LmsRow::new(0.0, 2.300, 49.0, 0.0417),
    LmsRow::new(0.25, 2.212, 61.5, 0.0378),
    LmsRow::new(0.5, 2.124, 67.7, 0.0351),
    LmsRow::new(0.75, 2.036, 71.6, 0.0335),
    LmsRow::new(1.0, 1.948, 74.8, 0.0328),
    LmsRow::new(1.25, 1.861, 77.8, 0.0328),
    LmsRow::new(1.5, 1.773, 80.7, 0.0332),
    LmsRow::new(1.75, 1.685, 83.4, 0.0340),
    LmsRow::new(2.0, 1.597, 85.8, 0.0348),
    LmsRow::new(2.5, 1.421, 89.7, 0.0364),
    LmsRow::new(3.0, 1.245, 93.5, 0.0378),
    LmsRow::new(3.5, 1.069, 97.1, 0.0386),
    LmsRow::new(4.0, 0.894, 100.4, 0.0392),
    LmsRow::new(4.5, 0.718, 103.6, 0.0397),
    LmsRow::new(5.0, 0.542, 106.8, 0.0403),
    LmsRow::new(5.5, 0.366, 110.1, 0.0410),
    LmsRow::new(6.0, 0.190, 113.3, 0.0417),
    LmsRow::new(6.5, 0.015, 116.4, 0.0423),
    LmsRow::new(7.0, -0.161, 119.5, 0.0426),
    LmsRow::new(7.5, -0.337, 122.4, 0.0426),
    LmsRow::new(8.0, -0.513, 125.1, 0.0424),
    LmsRow::new(8.5, -0.689, 127.8, 0.0421),
    LmsRow::new(9.0, -0.864, 130.4, 0.0420),
    LmsRow::new(9.5, -1.040, 133.1, 0.0424),
    LmsRow::new(10.0, -1.216, 135.9, 0.0435),
    LmsRow::new(10.5, -1.392, 138.8, 0.0453),
    LmsRow::new(11.0, -1.401, 142.0, 0.0476),
    LmsRow::new(11.5, -0.965, 145.4, 0.0500),
    LmsRow::new(12.0, -0.275, 149.0, 0.0519),
    LmsRow::new(12.5, 0.428, 153.1, 0.0526),
    LmsRow::new(13.0, 0.931, 157.0, 0.0517),
    LmsRow::new(13.5, 1.090, 160.5, 0.0491),
    LmsRow::new(14.0, 0.865, 163.4, 0.0453),
    LmsRow::new(14.5, 0.323, 165.6, 0.0414),
    LmsRow::new(15.0, -0.370, 167.3, 0.0382),
    LmsRow::new(15.5, -0.982, 168.6, 0.0358),
    LmsRow::new(16.0, -1.267, 169.5, 0.0344),
    LmsRow::new(16.5, -1.031, 170.1, 0.0340),
    LmsRow::new(17.0, -0.516, 170.5, 0.0340),
    LmsRow::new(17.5, 0.000, 170.8, 0.0340),
];

pub(crate) const FEMALE_HEIGHT: [LmsRow; 40] = [
    LmsRow::new(0.0, 1.200, 48.5, 0.0390),
    LmsRow::new(0.25, 1.159, 60.1, 0.0361),
    LmsRow::new(0.5, 1.117, 66.2, 0.0341),
    LmsRow::new(0.75, 1.076, 70.2, 0.0327),
    LmsRow::new(1.0, 1.034, 73.5, 0.0318),
    LmsRow::new(1.25, 0.993, 76.6, 0.0316),
    LmsRow::new(1.5, 0.952, 79.5, 0.0317),
    LmsRow::new(1.75, 0.910, 82.2, 0.0321),
    LmsRow::new(2.0, 0.869, 84.6, 0.0328),
    LmsRow::new(2.5, 0.786, 88.4, 0.0344),
    LmsRow::new(3.0, 0.703, 91.8, 0.0361),
    LmsRow::new(3.5, 0.620, 95.4, 0.0376),
    LmsRow::new(4.0, 0.538, 99.4, 0.0389),
    LmsRow::new(4.5, 0.455, 103.2, 0.0399),
    LmsRow::new(5.0, 0.372, 106.7, 0.0406),
    LmsRow::new(5.5, 0.289, 109.7, 0.0411),
    LmsRow::new(6.0, 0.206, 112.7, 0.0414),
    LmsRow::new(6.5, 0.124, 115.5, 0.0416),
    LmsRow::new(7.0, 0.041, 118.3, 0.0418),
    LmsRow::new(7.5, -0.042, 121.2, 0.0421),
    LmsRow::new(8.0, -0.114, 124.1, 0.0428),
    LmsRow::new(8.5, -0.036, 127.2, 0.0438),
    LmsRow::new(9.0, 0.213, 130.4, 0.0451),
    LmsRow::new(9.5, 0.599, 133.8, 0.0466),
    LmsRow::new(10.0, 1.055, 137.2, 0.0477),
    LmsRow::new(10.5, 1.506, 140.6, 0.0481),
    LmsRow::new(11.0, 1.879, 144.0, 0.0472),
    LmsRow::new(11.5, 2.118, 147.2, 0.0447),
    LmsRow::new(12.0, 2.190, 150.0, 0.0410),
    LmsRow::new(12.5, 2.090, 152.1, 0.0367),
    LmsRow::new(13.0, 1.843, 153.8, 0.0342),
    LmsRow::new(13.5, 1.498, 155.1, 0.0324),
    LmsRow::new(14.0, 1.124, 155.9, 0.0314),
    LmsRow::new(14.5, 0.801, 156.6, 0.0310),
    LmsRow::new(15.0, 0.602, 157.0, 0.0310),
    LmsRow::new(15.5, 0.579, 157.3, 0.0310),
    LmsRow::new(16.0, 0.742, 157.5, 0.0310),
    LmsRow::new(16.5, 1.032, 157.7, 0.0310),
    LmsRow::new(17.0, 1.295, 157.8, 0.0310),
    LmsRow::new(17.5, 1.250, 157.8, 0.0310),
];

pub(crate) const MALE_WEIGHT: [LmsRow; 40] = [
    LmsRow::new(0.0, 0.774, 3.00, 0.149),
    LmsRow::new(0.25, 0.490, 6.31, 0.131),
    LmsRow::new(0.5, 0.262, 7.93, 0.119),
    LmsRow::new(0.75, 0.082, 8.80, 0.110),
    LmsRow::new(1.0, -0.062, 9.38, 0.105),
    LmsRow::new(1.25, -0.177, 9.91, 0.102),
    LmsRow::new(1.5, -0.269, 10.4, 0.101),
    LmsRow::new(1.75, -0.344, 11.0, 0.102),
    LmsRow::new(2.0, -0.408, 11.5, 0.103),
    LmsRow::new(2.5, -0.513, 12.5, 0.108),
    LmsRow::new(3.0, -0.607, 13.5, 0.113),
    LmsRow::new(3.5, -0.703, 14.5, 0.119),
    LmsRow::new(4.0, -0.804, 15.5, 0.123),
    LmsRow::new(4.5, -0.913, 16.5, 0.127),
    LmsRow::new(5.0, -1.026, 17.5, 0.131),
    LmsRow::new(5.5, -1.136, 18.5, 0.134),
    LmsRow::new(6.0, -1.236, 19.6, 0.138),
    LmsRow::new(6.5, -1.321, 20.9, 0.142),
    LmsRow::new(7.0, -1.384, 22.2, 0.146),
    LmsRow::new(7.5, -1.420, 23.5, 0.152),
    LmsRow::new(8.0, -1.429, 25.0, 0.159),
    LmsRow::new(8.5, -1.407, 26.4, 0.166),
    LmsRow::new(9.0, -1.358, 28.0, 0.174),
    LmsRow::new(9.5, -1.284, 29.6, 0.182),
    LmsRow::new(10.0, -1.191, 31.4, 0.189),
    LmsRow::new(10.5, -1.084, 33.4, 0.195),
    LmsRow::new(11.0, -0.971, 35.6, 0.200),
    LmsRow::new(11.5, -0.862, 38.1, 0.204),
    LmsRow::new(12.0, -0.764, 40.7, 0.206),
    LmsRow::new(12.5, -0.686, 43.6, 0.205),
    LmsRow::new(13.0, -0.636, 46.3, 0.201),
    LmsRow::new(13.5, -0.619, 49.0, 0.196),
    LmsRow::new(14.0, -0.642, 51.6, 0.187),
    LmsRow::new(14.5, -0.705, 54.0, 0.178),
    LmsRow::new(15.0, -0.809, 55.9, 0.169),
    LmsRow::new(15.5, -0.952, 57.5, 0.161),
    LmsRow::new(16.0, -1.127, 58.8, 0.155),
    LmsRow::new(16.5, -1.325, 59.7, 0.151),
    LmsRow::new(17.0, -1.534, 60.4, 0.147),
    LmsRow::new(17.5, -1.739, 60.9, 0.141),
];

pub(crate) const FEMALE_WEIGHT: [LmsRow; 40] = [
    LmsRow::new(0.0, 0.754, 2.95, 0.146),
    LmsRow::new(0.25, 0.375, 5.86, 0.126),
    LmsRow::new(0.5, 0.083, 7.32, 0.113),
    LmsRow::new(0.75, -0.139, 8.14, 0.106),
    LmsRow::new(1.0, -0.303, 8.72, 0.103),
    LmsRow::new(1.25, -0.422, 9.26, 0.102),
    LmsRow::new(1.5, -0.506, 9.82, 0.102),
    LmsRow::new(1.75, -0.563, 10.4, 0.104),
    LmsRow::new(2.0, -0.602, 11.0, 0.105),
    LmsRow::new(2.5, -0.646, 12.1, 0.110),
    LmsRow::new(3.0, -0.677, 13.1, 0.114),
    LmsRow::new(3.5, -0.718, 14.0, 0.118),
    LmsRow::new(4.0, -0.778, 15.1, 0.122),
    LmsRow::new(4.5, -0.861, 16.1, 0.127),
    LmsRow::new(5.0, -0.960, 17.1, 0.131),
    LmsRow::new(5.5, -1.068, 18.2, 0.137),
    LmsRow::new(6.0, -1.171, 19.4, 0.142),
    LmsRow::new(6.5, -1.259, 20.6, 0.148),
    LmsRow::new(7.0, -1.319, 21.9, 0.154),
    LmsRow::new(7.5, -1.344, 23.2, 0.159),
    LmsRow::new(8.0, -1.328, 24.5, 0.164),
    LmsRow::new(8.5, -1.269, 25.9, 0.169),
    LmsRow::new(9.0, -1.169, 27.4, 0.174),
    LmsRow::new(9.5, -1.037, 29.2, 0.180),
    LmsRow::new(10.0, -0.884, 31.2, 0.185),
    LmsRow::new(10.5, -0.722, 33.6, 0.190),
    LmsRow::new(11.0, -0.572, 36.3, 0.194),
    LmsRow::new(11.5, -0.448, 39.0, 0.195),
    LmsRow::new(12.0, -0.368, 41.5, 0.194),
    LmsRow::new(12.5, -0.346, 43.8, 0.187),
    LmsRow::new(13.0, -0.389, 45.8, 0.176),
    LmsRow::new(13.5, -0.496, 47.5, 0.164),
    LmsRow::new(14.0, -0.653, 48.8, 0.154),
    LmsRow::new(14.5, -0.830, 49.8, 0.147),
    LmsRow::new(15.0, -0.976, 50.6, 0.142),
    LmsRow::new(15.5, -1.012, 51.2, 0.139),
    LmsRow::new(16.0, -1.072, 51.6, 0.138),
    LmsRow::new(16.5, -1.132, 51.9, 0.137),
    LmsRow::new(17.0, -1.192, 52.1, 0.135),
    LmsRow::new(17.5, -1.252, 52.3, 0.134),
];
