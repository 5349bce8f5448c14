//! ISO 3166-1 country table with approximate centroids.

use super::Country;

const fn c(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    official_name: Option<&'static str>,
    common_name: Option<&'static str>,
    lat: f64,
    lon: f64,
) -> Country {
    Country {
        alpha2,
        alpha3,
        name,
        official_name,
        common_name,
        lat,
        lon,
    }
}

#[rustfmt::skip]
pub static COUNTRIES: &[Country] = &[
    c("AW", "ABW", "Aruba", None, None, 12.52, -69.97),
    c("AF", "AFG", "Afghanistan", Some("Islamic Republic of Afghanistan"), None, 33.94, 67.71),
    c("AO", "AGO", "Angola", Some("Republic of Angola"), None, -11.20, 17.87),
    c("AI", "AIA", "Anguilla", None, None, 18.22, -63.07),
    c("AX", "ALA", "Åland Islands", None, None, 60.18, 19.92),
    c("AL", "ALB", "Albania", Some("Republic of Albania"), None, 41.15, 20.17),
    c("AD", "AND", "Andorra", Some("Principality of Andorra"), None, 42.55, 1.60),
    c("AE", "ARE", "United Arab Emirates", None, None, 23.42, 53.85),
    c("AR", "ARG", "Argentina", Some("Argentine Republic"), None, -38.42, -63.62),
    c("AM", "ARM", "Armenia", Some("Republic of Armenia"), None, 40.07, 45.04),
    c("AS", "ASM", "American Samoa", None, None, -14.27, -170.13),
    c("AQ", "ATA", "Antarctica", None, None, -75.25, -0.07),
    c("TF", "ATF", "French Southern Territories", None, None, -49.28, 69.35),
    c("AG", "ATG", "Antigua and Barbuda", None, None, 17.06, -61.80),
    c("AU", "AUS", "Australia", None, None, -25.27, 133.78),
    c("AT", "AUT", "Austria", Some("Republic of Austria"), None, 47.52, 14.55),
    c("AZ", "AZE", "Azerbaijan", Some("Republic of Azerbaijan"), None, 40.14, 47.58),
    c("BI", "BDI", "Burundi", Some("Republic of Burundi"), None, -3.37, 29.92),
    c("BE", "BEL", "Belgium", Some("Kingdom of Belgium"), None, 50.50, 4.47),
    c("BJ", "BEN", "Benin", Some("Republic of Benin"), None, 9.31, 2.32),
    c("BQ", "BES", "Bonaire, Sint Eustatius and Saba", None, None, 12.18, -68.24),
    c("BF", "BFA", "Burkina Faso", None, None, 12.24, -1.56),
    c("BD", "BGD", "Bangladesh", Some("People's Republic of Bangladesh"), None, 23.68, 90.36),
    c("BG", "BGR", "Bulgaria", Some("Republic of Bulgaria"), None, 42.73, 25.49),
    c("BH", "BHR", "Bahrain", Some("Kingdom of Bahrain"), None, 25.93, 50.64),
    c("BS", "BHS", "Bahamas", Some("Commonwealth of the Bahamas"), None, 25.03, -77.40),
    c("BA", "BIH", "Bosnia and Herzegovina", Some("Republic of Bosnia and Herzegovina"), None, 43.92, 17.68),
    c("BL", "BLM", "Saint Barthélemy", None, None, 17.90, -62.83),
    c("BY", "BLR", "Belarus", Some("Republic of Belarus"), None, 53.71, 27.95),
    c("BZ", "BLZ", "Belize", None, None, 17.19, -88.50),
    c("BM", "BMU", "Bermuda", None, None, 32.32, -64.76),
    c("BO", "BOL", "Bolivia, Plurinational State of", Some("Plurinational State of Bolivia"), Some("Bolivia"), -16.29, -63.59),
    c("BR", "BRA", "Brazil", Some("Federative Republic of Brazil"), None, -14.24, -51.93),
    c("BB", "BRB", "Barbados", None, None, 13.19, -59.54),
    c("BN", "BRN", "Brunei Darussalam", None, None, 4.54, 114.73),
    c("BT", "BTN", "Bhutan", Some("Kingdom of Bhutan"), None, 27.51, 90.43),
    c("BV", "BVT", "Bouvet Island", None, None, -54.42, 3.41),
    c("BW", "BWA", "Botswana", Some("Republic of Botswana"), None, -22.33, 24.68),
    c("CF", "CAF", "Central African Republic", None, None, 6.61, 20.94),
    c("CA", "CAN", "Canada", None, None, 56.13, -106.35),
    c("CC", "CCK", "Cocos (Keeling) Islands", None, None, -12.16, 96.87),
    c("CH", "CHE", "Switzerland", Some("Swiss Confederation"), None, 46.82, 8.23),
    c("CL", "CHL", "Chile", Some("Republic of Chile"), None, -35.68, -71.54),
    c("CN", "CHN", "China", Some("People's Republic of China"), None, 35.86, 104.20),
    c("CI", "CIV", "Côte d'Ivoire", Some("Republic of Côte d'Ivoire"), None, 7.54, -5.55),
    c("CM", "CMR", "Cameroon", Some("Republic of Cameroon"), None, 7.37, 12.35),
    c("CD", "COD", "Congo, The Democratic Republic of the", None, None, -4.04, 21.76),
    c("CG", "COG", "Congo", Some("Republic of the Congo"), None, -0.23, 15.83),
    c("CK", "COK", "Cook Islands", None, None, -21.24, -159.78),
    c("CO", "COL", "Colombia", Some("Republic of Colombia"), None, 4.57, -74.30),
    c("KM", "COM", "Comoros", Some("Union of the Comoros"), None, -11.88, 43.87),
    c("CV", "CPV", "Cabo Verde", Some("Republic of Cabo Verde"), None, 16.00, -24.01),
    c("CR", "CRI", "Costa Rica", Some("Republic of Costa Rica"), None, 9.75, -83.75),
    c("CU", "CUB", "Cuba", Some("Republic of Cuba"), None, 21.52, -77.78),
    c("CW", "CUW", "Curaçao", None, None, 12.17, -68.99),
    c("CX", "CXR", "Christmas Island", None, None, -10.45, 105.69),
    c("KY", "CYM", "Cayman Islands", None, None, 19.51, -80.57),
    c("CY", "CYP", "Cyprus", Some("Republic of Cyprus"), None, 35.13, 33.43),
    c("CZ", "CZE", "Czechia", Some("Czech Republic"), None, 49.82, 15.47),
    c("DE", "DEU", "Germany", Some("Federal Republic of Germany"), None, 51.17, 10.45),
    c("DJ", "DJI", "Djibouti", Some("Republic of Djibouti"), None, 11.83, 42.59),
    c("DM", "DMA", "Dominica", Some("Commonwealth of Dominica"), None, 15.41, -61.37),
    c("DK", "DNK", "Denmark", Some("Kingdom of Denmark"), None, 56.26, 9.50),
    c("DO", "DOM", "Dominican Republic", None, None, 18.74, -70.16),
    c("DZ", "DZA", "Algeria", Some("People's Democratic Republic of Algeria"), None, 28.03, 1.66),
    c("EC", "ECU", "Ecuador", Some("Republic of Ecuador"), None, -1.83, -78.18),
    c("EG", "EGY", "Egypt", Some("Arab Republic of Egypt"), None, 26.82, 30.80),
    c("ER", "ERI", "Eritrea", Some("the State of Eritrea"), None, 15.18, 39.78),
    c("EH", "ESH", "Western Sahara", None, None, 24.22, -12.89),
    c("ES", "ESP", "Spain", Some("Kingdom of Spain"), None, 40.46, -3.75),
    c("EE", "EST", "Estonia", Some("Republic of Estonia"), None, 58.60, 25.01),
    c("ET", "ETH", "Ethiopia", Some("Federal Democratic Republic of Ethiopia"), None, 9.15, 40.49),
    c("FI", "FIN", "Finland", Some("Republic of Finland"), None, 61.92, 25.75),
    c("FJ", "FJI", "Fiji", Some("Republic of Fiji"), None, -16.58, 179.41),
    c("FK", "FLK", "Falkland Islands (Malvinas)", None, None, -51.80, -59.52),
    c("FR", "FRA", "France", Some("French Republic"), None, 46.23, 2.21),
    c("FO", "FRO", "Faroe Islands", None, None, 61.89, -6.91),
    c("FM", "FSM", "Micronesia, Federated States of", Some("Federated States of Micronesia"), None, 7.43, 150.55),
    c("GA", "GAB", "Gabon", Some("Gabonese Republic"), None, -0.80, 11.61),
    c("GB", "GBR", "United Kingdom", Some("United Kingdom of Great Britain and Northern Ireland"), None, 55.38, -3.44),
    c("GE", "GEO", "Georgia", None, None, 42.32, 43.36),
    c("GG", "GGY", "Guernsey", None, None, 49.47, -2.59),
    c("GH", "GHA", "Ghana", Some("Republic of Ghana"), None, 7.95, -1.02),
    c("GI", "GIB", "Gibraltar", None, None, 36.14, -5.35),
    c("GN", "GIN", "Guinea", Some("Republic of Guinea"), None, 9.95, -9.70),
    c("GP", "GLP", "Guadeloupe", None, None, 16.27, -61.55),
    c("GM", "GMB", "Gambia", Some("Republic of the Gambia"), None, 13.44, -15.31),
    c("GW", "GNB", "Guinea-Bissau", Some("Republic of Guinea-Bissau"), None, 11.80, -15.18),
    c("GQ", "GNQ", "Equatorial Guinea", Some("Republic of Equatorial Guinea"), None, 1.65, 10.27),
    c("GR", "GRC", "Greece", Some("Hellenic Republic"), None, 39.07, 21.82),
    c("GD", "GRD", "Grenada", None, None, 12.26, -61.60),
    c("GL", "GRL", "Greenland", None, None, 71.71, -42.60),
    c("GT", "GTM", "Guatemala", Some("Republic of Guatemala"), None, 15.78, -90.23),
    c("GF", "GUF", "French Guiana", None, None, 3.93, -53.13),
    c("GU", "GUM", "Guam", None, None, 13.44, 144.79),
    c("GY", "GUY", "Guyana", Some("Republic of Guyana"), None, 4.86, -58.93),
    c("HK", "HKG", "Hong Kong", Some("Hong Kong Special Administrative Region of China"), None, 22.40, 114.11),
    c("HM", "HMD", "Heard Island and McDonald Islands", None, None, -53.08, 73.50),
    c("HN", "HND", "Honduras", Some("Republic of Honduras"), None, 15.20, -86.24),
    c("HR", "HRV", "Croatia", Some("Republic of Croatia"), None, 45.10, 15.20),
    c("HT", "HTI", "Haiti", Some("Republic of Haiti"), None, 18.97, -72.29),
    c("HU", "HUN", "Hungary", None, None, 47.16, 19.50),
    c("ID", "IDN", "Indonesia", Some("Republic of Indonesia"), None, -0.79, 113.92),
    c("IM", "IMN", "Isle of Man", None, None, 54.24, -4.55),
    c("IN", "IND", "India", Some("Republic of India"), None, 20.59, 78.96),
    c("IO", "IOT", "British Indian Ocean Territory", None, None, -6.34, 71.88),
    c("IE", "IRL", "Ireland", None, None, 53.41, -8.24),
    c("IR", "IRN", "Iran, Islamic Republic of", Some("Islamic Republic of Iran"), Some("Iran"), 32.43, 53.69),
    c("IQ", "IRQ", "Iraq", Some("Republic of Iraq"), None, 33.22, 43.68),
    c("IS", "ISL", "Iceland", Some("Republic of Iceland"), None, 64.96, -19.02),
    c("IL", "ISR", "Israel", Some("State of Israel"), None, 31.05, 34.85),
    c("IT", "ITA", "Italy", Some("Italian Republic"), None, 41.87, 12.57),
    c("JM", "JAM", "Jamaica", None, None, 18.11, -77.30),
    c("JE", "JEY", "Jersey", None, None, 49.21, -2.13),
    c("JO", "JOR", "Jordan", Some("Hashemite Kingdom of Jordan"), None, 30.59, 36.24),
    c("JP", "JPN", "Japan", None, None, 36.20, 138.25),
    c("KZ", "KAZ", "Kazakhstan", Some("Republic of Kazakhstan"), None, 48.02, 66.92),
    c("KE", "KEN", "Kenya", Some("Republic of Kenya"), None, -0.02, 37.91),
    c("KG", "KGZ", "Kyrgyzstan", Some("Kyrgyz Republic"), None, 41.20, 74.77),
    c("KH", "KHM", "Cambodia", Some("Kingdom of Cambodia"), None, 12.57, 104.99),
    c("KI", "KIR", "Kiribati", Some("Republic of Kiribati"), None, -3.37, -168.73),
    c("KN", "KNA", "Saint Kitts and Nevis", None, None, 17.36, -62.78),
    c("KR", "KOR", "Korea, Republic of", None, Some("South Korea"), 35.91, 127.77),
    c("KW", "KWT", "Kuwait", Some("State of Kuwait"), None, 29.31, 47.48),
    c("LA", "LAO", "Lao People's Democratic Republic", None, Some("Laos"), 19.86, 102.50),
    c("LB", "LBN", "Lebanon", Some("Lebanese Republic"), None, 33.85, 35.86),
    c("LR", "LBR", "Liberia", Some("Republic of Liberia"), None, 6.43, -9.43),
    c("LY", "LBY", "Libya", None, None, 26.34, 17.23),
    c("LC", "LCA", "Saint Lucia", None, None, 13.91, -60.98),
    c("LI", "LIE", "Liechtenstein", Some("Principality of Liechtenstein"), None, 47.17, 9.56),
    c("LK", "LKA", "Sri Lanka", Some("Democratic Socialist Republic of Sri Lanka"), None, 7.87, 80.77),
    c("LS", "LSO", "Lesotho", Some("Kingdom of Lesotho"), None, -29.61, 28.23),
    c("LT", "LTU", "Lithuania", Some("Republic of Lithuania"), None, 55.17, 23.88),
    c("LU", "LUX", "Luxembourg", Some("Grand Duchy of Luxembourg"), None, 49.82, 6.13),
    c("LV", "LVA", "Latvia", Some("Republic of Latvia"), None, 56.88, 24.60),
    c("MO", "MAC", "Macao", Some("Macao Special Administrative Region of China"), None, 22.20, 113.54),
    c("MF", "MAF", "Saint Martin (French part)", None, None, 18.08, -63.05),
    c("MA", "MAR", "Morocco", Some("Kingdom of Morocco"), None, 31.79, -7.09),
    c("MC", "MCO", "Monaco", Some("Principality of Monaco"), None, 43.75, 7.41),
    c("MD", "MDA", "Moldova, Republic of", Some("Republic of Moldova"), Some("Moldova"), 47.41, 28.37),
    c("MG", "MDG", "Madagascar", Some("Republic of Madagascar"), None, -18.77, 46.87),
    c("MV", "MDV", "Maldives", Some("Republic of Maldives"), None, 3.20, 73.22),
    c("MX", "MEX", "Mexico", Some("United Mexican States"), None, 23.63, -102.55),
    c("MH", "MHL", "Marshall Islands", Some("Republic of the Marshall Islands"), None, 7.13, 171.18),
    c("MK", "MKD", "North Macedonia", Some("Republic of North Macedonia"), None, 41.61, 21.75),
    c("ML", "MLI", "Mali", Some("Republic of Mali"), None, 17.57, -4.00),
    c("MT", "MLT", "Malta", Some("Republic of Malta"), None, 35.94, 14.38),
    c("MM", "MMR", "Myanmar", Some("Republic of Myanmar"), None, 21.91, 95.96),
    c("ME", "MNE", "Montenegro", None, None, 42.71, 19.37),
    c("MN", "MNG", "Mongolia", None, None, 46.86, 103.85),
    c("MP", "MNP", "Northern Mariana Islands", Some("Commonwealth of the Northern Mariana Islands"), None, 17.33, 145.38),
    c("MZ", "MOZ", "Mozambique", Some("Republic of Mozambique"), None, -18.67, 35.53),
    c("MR", "MRT", "Mauritania", Some("Islamic Republic of Mauritania"), None, 21.01, -10.94),
    c("MS", "MSR", "Montserrat", None, None, 16.74, -62.19),
    c("MQ", "MTQ", "Martinique", None, None, 14.64, -61.02),
    c("MU", "MUS", "Mauritius", Some("Republic of Mauritius"), None, -20.35, 57.55),
    c("MW", "MWI", "Malawi", Some("Republic of Malawi"), None, -13.25, 34.30),
    c("MY", "MYS", "Malaysia", None, None, 4.21, 101.98),
    c("YT", "MYT", "Mayotte", None, None, -12.83, 45.17),
    c("NA", "NAM", "Namibia", Some("Republic of Namibia"), None, -22.96, 18.49),
    c("NC", "NCL", "New Caledonia", None, None, -20.90, 165.62),
    c("NE", "NER", "Niger", Some("Republic of the Niger"), None, 17.61, 8.08),
    c("NF", "NFK", "Norfolk Island", None, None, -29.04, 167.95),
    c("NG", "NGA", "Nigeria", Some("Federal Republic of Nigeria"), None, 9.08, 8.68),
    c("NI", "NIC", "Nicaragua", Some("Republic of Nicaragua"), None, 12.87, -85.21),
    c("NU", "NIU", "Niue", None, None, -19.05, -169.87),
    c("NL", "NLD", "Netherlands", Some("Kingdom of the Netherlands"), None, 52.13, 5.29),
    c("NO", "NOR", "Norway", Some("Kingdom of Norway"), None, 60.47, 8.47),
    c("NP", "NPL", "Nepal", Some("Federal Democratic Republic of Nepal"), None, 28.39, 84.12),
    c("NR", "NRU", "Nauru", Some("Republic of Nauru"), None, -0.52, 166.93),
    c("NZ", "NZL", "New Zealand", None, None, -40.90, 174.89),
    c("OM", "OMN", "Oman", Some("Sultanate of Oman"), None, 21.51, 55.92),
    c("PK", "PAK", "Pakistan", Some("Islamic Republic of Pakistan"), None, 30.38, 69.35),
    c("PA", "PAN", "Panama", Some("Republic of Panama"), None, 8.54, -80.78),
    c("PN", "PCN", "Pitcairn", None, None, -24.70, -127.44),
    c("PE", "PER", "Peru", Some("Republic of Peru"), None, -9.19, -75.02),
    c("PH", "PHL", "Philippines", Some("Republic of the Philippines"), None, 12.88, 121.77),
    c("PW", "PLW", "Palau", Some("Republic of Palau"), None, 7.51, 134.58),
    c("PG", "PNG", "Papua New Guinea", Some("Independent State of Papua New Guinea"), None, -6.31, 143.96),
    c("PL", "POL", "Poland", Some("Republic of Poland"), None, 51.92, 19.15),
    c("PR", "PRI", "Puerto Rico", None, None, 18.22, -66.59),
    c("KP", "PRK", "Korea, Democratic People's Republic of", Some("Democratic People's Republic of Korea"), Some("North Korea"), 40.34, 127.51),
    c("PT", "PRT", "Portugal", Some("Portuguese Republic"), None, 39.40, -8.22),
    c("PY", "PRY", "Paraguay", Some("Republic of Paraguay"), None, -23.44, -58.44),
    c("PS", "PSE", "Palestine, State of", Some("the State of Palestine"), Some("West Bank and Gaza"), 31.95, 35.23),
    c("PF", "PYF", "French Polynesia", None, None, -17.68, -149.41),
    c("QA", "QAT", "Qatar", Some("State of Qatar"), None, 25.35, 51.18),
    c("RE", "REU", "Réunion", None, None, -21.12, 55.54),
    c("RO", "ROU", "Romania", None, None, 45.94, 24.97),
    c("RU", "RUS", "Russian Federation", None, Some("Russia"), 61.52, 105.32),
    c("RW", "RWA", "Rwanda", Some("Rwandese Republic"), None, -1.94, 29.87),
    c("SA", "SAU", "Saudi Arabia", Some("Kingdom of Saudi Arabia"), None, 23.89, 45.08),
    c("SD", "SDN", "Sudan", Some("Republic of the Sudan"), None, 12.86, 30.22),
    c("SN", "SEN", "Senegal", Some("Republic of Senegal"), None, 14.50, -14.45),
    c("SG", "SGP", "Singapore", Some("Republic of Singapore"), None, 1.35, 103.82),
    c("GS", "SGS", "South Georgia and the South Sandwich Islands", None, None, -54.43, -36.59),
    c("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha", None, None, -24.14, -10.03),
    c("SJ", "SJM", "Svalbard and Jan Mayen", None, None, 77.55, 23.67),
    c("SB", "SLB", "Solomon Islands", None, None, -9.65, 160.16),
    c("SL", "SLE", "Sierra Leone", Some("Republic of Sierra Leone"), None, 8.46, -11.78),
    c("SV", "SLV", "El Salvador", Some("Republic of El Salvador"), None, 13.79, -88.90),
    c("SM", "SMR", "San Marino", Some("Republic of San Marino"), None, 43.94, 12.46),
    c("SO", "SOM", "Somalia", Some("Federal Republic of Somalia"), None, 5.15, 46.20),
    c("PM", "SPM", "Saint Pierre and Miquelon", None, None, 46.94, -56.27),
    c("RS", "SRB", "Serbia", Some("Republic of Serbia"), None, 44.02, 21.01),
    c("SS", "SSD", "South Sudan", Some("Republic of South Sudan"), None, 6.88, 31.31),
    c("ST", "STP", "Sao Tome and Principe", Some("Democratic Republic of Sao Tome and Principe"), None, 0.19, 6.61),
    c("SR", "SUR", "Suriname", Some("Republic of Suriname"), None, 3.92, -56.03),
    c("SK", "SVK", "Slovakia", Some("Slovak Republic"), None, 48.67, 19.70),
    c("SI", "SVN", "Slovenia", Some("Republic of Slovenia"), None, 46.15, 15.00),
    c("SE", "SWE", "Sweden", Some("Kingdom of Sweden"), None, 60.13, 18.64),
    c("SZ", "SWZ", "Eswatini", Some("Kingdom of Eswatini"), None, -26.52, 31.47),
    c("SX", "SXM", "Sint Maarten (Dutch part)", None, None, 18.04, -63.05),
    c("SC", "SYC", "Seychelles", Some("Republic of Seychelles"), None, -4.68, 55.49),
    c("SY", "SYR", "Syrian Arab Republic", None, Some("Syria"), 34.80, 38.99),
    c("TC", "TCA", "Turks and Caicos Islands", None, None, 21.69, -71.80),
    c("TD", "TCD", "Chad", Some("Republic of Chad"), None, 15.45, 18.73),
    c("TG", "TGO", "Togo", Some("Togolese Republic"), None, 8.62, 0.82),
    c("TH", "THA", "Thailand", Some("Kingdom of Thailand"), None, 15.87, 100.99),
    c("TJ", "TJK", "Tajikistan", Some("Republic of Tajikistan"), None, 38.86, 71.28),
    c("TK", "TKL", "Tokelau", None, None, -8.97, -171.86),
    c("TM", "TKM", "Turkmenistan", None, None, 38.97, 59.56),
    c("TL", "TLS", "Timor-Leste", Some("Democratic Republic of Timor-Leste"), None, -8.87, 125.73),
    c("TO", "TON", "Tonga", Some("Kingdom of Tonga"), None, -21.18, -175.20),
    c("TT", "TTO", "Trinidad and Tobago", Some("Republic of Trinidad and Tobago"), None, 10.69, -61.22),
    c("TN", "TUN", "Tunisia", Some("Republic of Tunisia"), None, 33.89, 9.54),
    c("TR", "TUR", "Türkiye", Some("Republic of Türkiye"), Some("Turkey"), 38.96, 35.24),
    c("TV", "TUV", "Tuvalu", None, None, -7.11, 177.65),
    c("TW", "TWN", "Taiwan, Province of China", None, Some("Taiwan"), 23.70, 120.96),
    c("TZ", "TZA", "Tanzania, United Republic of", Some("United Republic of Tanzania"), Some("Tanzania"), -6.37, 34.89),
    c("UG", "UGA", "Uganda", Some("Republic of Uganda"), None, 1.37, 32.29),
    c("UA", "UKR", "Ukraine", None, None, 48.38, 31.17),
    c("UM", "UMI", "United States Minor Outlying Islands", None, None, 19.28, 166.65),
    c("UY", "URY", "Uruguay", Some("Eastern Republic of Uruguay"), None, -32.52, -55.77),
    c("US", "USA", "United States", Some("United States of America"), None, 37.09, -95.71),
    c("UZ", "UZB", "Uzbekistan", Some("Republic of Uzbekistan"), None, 41.38, 64.59),
    c("VA", "VAT", "Holy See (Vatican City State)", None, None, 41.90, 12.45),
    c("VC", "VCT", "Saint Vincent and the Grenadines", None, None, 12.98, -61.29),
    c("VE", "VEN", "Venezuela, Bolivarian Republic of", Some("Bolivarian Republic of Venezuela"), Some("Venezuela"), 6.42, -66.59),
    c("VG", "VGB", "Virgin Islands, British", Some("British Virgin Islands"), None, 18.42, -64.64),
    c("VI", "VIR", "Virgin Islands, U.S.", Some("Virgin Islands of the United States"), None, 18.34, -64.90),
    c("VN", "VNM", "Viet Nam", Some("Socialist Republic of Viet Nam"), Some("Vietnam"), 14.06, 108.28),
    c("VU", "VUT", "Vanuatu", Some("Republic of Vanuatu"), None, -15.38, 166.96),
    c("WF", "WLF", "Wallis and Futuna", None, None, -13.77, -177.16),
    c("WS", "WSM", "Samoa", Some("Independent State of Samoa"), None, -13.76, -172.10),
    c("XK", "XKX", "Kosovo", Some("Republic of Kosovo"), None, 42.60, 20.90),
    c("YE", "YEM", "Yemen", Some("Republic of Yemen"), None, 15.55, 48.52),
    c("ZA", "ZAF", "South Africa", Some("Republic of South Africa"), None, -30.56, 22.94),
    c("ZM", "ZMB", "Zambia", Some("Republic of Zambia"), None, -13.13, 27.85),
    c("ZW", "ZWE", "Zimbabwe", Some("Republic of Zimbabwe"), None, -19.02, 29.15),
];
