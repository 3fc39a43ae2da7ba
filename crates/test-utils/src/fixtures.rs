//! Captured NDBC documents for tests.
//!
//! The readings describe two stations from [`ACTIVE_STATIONS_XML`]: 44097
//! (a wave buoy off Block Island) and 44013 (a met buoy east of Boston).
//! All timestamps fall on 2016-05-23 UTC.

/// Station directory with two buoys and one fixed platform.
pub const ACTIVE_STATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stations created="2016-05-23T10:50:01UTC" count="3">
  <station id="44097" lat="40.967" lon="-71.126" elev="0" name="Block Island, RI" owner="CDIP" pgm="IOOS Partners" type="buoy" met="n" currents="n" waterquality="n" dart="n"/>
  <station id="BZBM3" lat="41.524" lon="-70.671" elev="3.2" name="Woods Hole, MA" owner="NOS" pgm="NOS/CO-OPS" type="fixed" met="y" currents="n" waterquality="n" dart="n"/>
  <station id="44013" lat="42.346" lon="-70.651" elev="0" name="Boston 16 NM East of Boston, MA" owner="NDBC" pgm="NDBC Meteorological/Ocean" type="buoy" met="y" currents="n" waterquality="n" dart="n"/>
</stations>
"#;

/// Coordinates near Block Island, closest to buoy 44097.
pub const BLOCK_ISLAND: (f64, f64) = (41.1, -71.5);

/// Coordinates off Boston, closest to buoy 44013.
pub const BOSTON_HARBOR: (f64, f64) = (42.35, -70.9);

/// `latest_obs/44013.txt`
pub const LATEST_OBS_44013: &str = "Station 44013
42°20'46\" N 70°39'4\" W

6:50 am EDT
1050 GMT 05/23/16
Wind: NE (50°), 9.9 kt
Gust: 12 kt
Seas: 2.0 ft
Peak Period: 4 sec
Pres: 30.11 falling
Air Temp: 47.8 °F
Water Temp: 46.8 °F
Dew Point: 42.3 °F

Wave Summary
6:50 am EDT
1050 GMT 05/23/16
Swell: 1.0 ft
Period: 7.7 sec
Direction: ESE
Wind Wave: 1.6 ft
Period: 3.8 sec
Direction: NE
";

/// `latest_obs/44097.txt`
pub const LATEST_OBS_44097: &str = "Station 44097
40°58'1\" N 71°7'34\" W

6:26 am EDT
1026 GMT 05/23/16
Seas: 3.0 ft
Peak Period: 10 sec
Mean Wave Dir: SSE (165°)
Water Temp: 54.5 °F
";

/// `realtime2/44013.txt`
pub const STANDARD_MET_44013: &str = "\
#YY  MM DD hh mm WDIR WSPD GST  WVHT   DPD   APD MWD   PRES  ATMP  WTMP  DEWP  VIS PTDY  TIDE
#yr  mo dy hr mn degT m/s  m/s     m   sec   sec degT   hPa  degC  degC  degC  nmi  hPa    ft
2016 05 23 10 50  50  5.0  6.0   0.6     4   3.7  80 1019.5  10.0  10.5   6.5   MM -0.7    MM
2016 05 23 10 40  40  4.0  5.0    MM    MM    MM  MM 1019.6   9.9  10.5   6.4   MM   MM    MM
2016 05 23 10 30  30  4.0  5.0   0.5     5   3.9  85 1019.7   9.8  10.4   6.3   MM   MM    MM
2016 05 23 10 20  30  3.0  4.0    MM    MM    MM  MM 1019.8   9.8  10.4   6.3   MM   MM    MM
";

/// `realtime2/44097.spec`
pub const DETAILED_WAVE_44097: &str = "\
#YY  MM DD hh mm WVHT  SwH  SwP  WWH  WWP SwD WWD  STEEPNESS  APD MWD
#yr  mo dy hr mn    m    m  sec    m  sec  -  degT     -      sec degT
2016 05 23 10 40  1.5  1.3 10.0  0.8  5.0 SSE SSW  AVERAGE  6.1 165
2016 05 23 09 40  1.4  1.2 10.0  0.7  4.8 SSE SSW  AVERAGE  6.0 160
";

/// `realtime2/44097.data_spec`
pub const ENERGY_SPECTRA_44097: &str = "\
#YY  MM DD hh mm Sep_Freq  < spec_1 (freq_1) spec_2 (freq_2) spec_3 (freq_3) ... >
2016 05 23 10 40 0.150 0.100 (0.050) 0.800 (0.075) 2.500 (0.100) 0.900 (0.125) 0.200 (0.150) 0.300 (0.175) 0.600 (0.200) 0.350 (0.225) 0.100 (0.250) 0.050 (0.275)
2016 05 23 09 40 9.999 0.100 (0.050) 0.700 (0.075) 2.200 (0.100) 0.800 (0.125) 0.200 (0.150) 0.250 (0.175) 0.500 (0.200) 0.300 (0.225) 0.100 (0.250) 0.050 (0.275)
";

/// `realtime2/44097.swdir`
pub const DIRECTIONAL_SPECTRA_44097: &str = "\
#YY  MM DD hh mm alpha1_1 (freq_1) alpha1_2 (freq_2) alpha1_3 (freq_3) ...
2016 05 23 10 40 999.0 (0.050) 160.0 (0.075) 165.0 (0.100) 170.0 (0.125) 190.0 (0.150) 200.0 (0.175) 210.0 (0.200) 215.0 (0.225) 220.0 (0.250) 999.0 (0.275)
2016 05 23 09 40 999.0 (0.050) 158.0 (0.075) 163.0 (0.100) 168.0 (0.125) 188.0 (0.150) 198.0 (0.175) 208.0 (0.200) 213.0 (0.225) 218.0 (0.250) 999.0 (0.275)
";

/// Newest timestamp in the 44097 spectral files, as seconds since the epoch.
pub const SPECTRA_44097_NEWEST_EPOCH: i64 = 1_464_000_000;

/// A minimal PNG signature, standing in for a rendered chart.
pub const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
