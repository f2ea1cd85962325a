//! ISO-4217 currency table (list one, unique alphabetic codes).
//!
//! Sorted by code; lookups binary-search it. Codes without a defined minor
//! unit (precious metals, bond units, testing codes) carry precision 0.

use crate::currency::CurrencyInfo;

const fn c(
    code: &'static str,
    numeric_code: u16,
    name: &'static str,
    entities: &'static [&'static str],
    precision: u32,
) -> CurrencyInfo {
    CurrencyInfo {
        code,
        numeric_code,
        name,
        entities,
        precision,
    }
}

pub(crate) static CURRENCIES: &[CurrencyInfo] = &[
    c("AED", 784, "UAE Dirham", &["UNITED ARAB EMIRATES (THE)"], 2),
    c("AFN", 971, "Afghani", &["AFGHANISTAN"], 2),
    c("ALL", 8, "Lek", &["ALBANIA"], 2),
    c("AMD", 51, "Armenian Dram", &["ARMENIA"], 2),
    c("ANG", 532, "Netherlands Antillean Guilder", &["CURAÇAO", "SINT MAARTEN (DUTCH PART)"], 2),
    c("AOA", 973, "Kwanza", &["ANGOLA"], 2),
    c("ARS", 32, "Argentine Peso", &["ARGENTINA"], 2),
    c("AUD", 36, "Australian Dollar", &["AUSTRALIA", "CHRISTMAS ISLAND", "COCOS (KEELING) ISLANDS (THE)", "HEARD ISLAND AND McDONALD ISLANDS", "KIRIBATI", "NAURU", "NORFOLK ISLAND", "TUVALU"], 2),
    c("AWG", 533, "Aruban Florin", &["ARUBA"], 2),
    c("AZN", 944, "Azerbaijan Manat", &["AZERBAIJAN"], 2),
    c("BAM", 977, "Convertible Mark", &["BOSNIA AND HERZEGOVINA"], 2),
    c("BBD", 52, "Barbados Dollar", &["BARBADOS"], 2),
    c("BDT", 50, "Taka", &["BANGLADESH"], 2),
    c("BGN", 975, "Bulgarian Lev", &["BULGARIA"], 2),
    c("BHD", 48, "Bahraini Dinar", &["BAHRAIN"], 3),
    c("BIF", 108, "Burundi Franc", &["BURUNDI"], 0),
    c("BMD", 60, "Bermudian Dollar", &["BERMUDA"], 2),
    c("BND", 96, "Brunei Dollar", &["BRUNEI DARUSSALAM"], 2),
    c("BOB", 68, "Boliviano", &["BOLIVIA (PLURINATIONAL STATE OF)"], 2),
    c("BOV", 984, "Mvdol", &["BOLIVIA (PLURINATIONAL STATE OF)"], 2),
    c("BRL", 986, "Brazilian Real", &["BRAZIL"], 2),
    c("BSD", 44, "Bahamian Dollar", &["BAHAMAS (THE)"], 2),
    c("BTN", 64, "Ngultrum", &["BHUTAN"], 2),
    c("BWP", 72, "Pula", &["BOTSWANA"], 2),
    c("BYN", 933, "Belarusian Ruble", &["BELARUS"], 2),
    c("BZD", 84, "Belize Dollar", &["BELIZE"], 2),
    c("CAD", 124, "Canadian Dollar", &["CANADA"], 2),
    c("CDF", 976, "Congolese Franc", &["CONGO (THE DEMOCRATIC REPUBLIC OF THE)"], 2),
    c("CHE", 947, "WIR Euro", &["SWITZERLAND"], 2),
    c("CHF", 756, "Swiss Franc", &["LIECHTENSTEIN", "SWITZERLAND"], 2),
    c("CHW", 948, "WIR Franc", &["SWITZERLAND"], 2),
    c("CLF", 990, "Unidad de Fomento", &["CHILE"], 4),
    c("CLP", 152, "Chilean Peso", &["CHILE"], 0),
    c("CNY", 156, "Yuan Renminbi", &["CHINA"], 2),
    c("COP", 170, "Colombian Peso", &["COLOMBIA"], 2),
    c("COU", 970, "Unidad de Valor Real", &["COLOMBIA"], 2),
    c("CRC", 188, "Costa Rican Colon", &["COSTA RICA"], 2),
    c("CUP", 192, "Cuban Peso", &["CUBA"], 2),
    c("CVE", 132, "Cabo Verde Escudo", &["CABO VERDE"], 2),
    c("CZK", 203, "Czech Koruna", &["CZECHIA"], 2),
    c("DJF", 262, "Djibouti Franc", &["DJIBOUTI"], 0),
    c("DKK", 208, "Danish Krone", &["DENMARK", "FAROE ISLANDS (THE)", "GREENLAND"], 2),
    c("DOP", 214, "Dominican Peso", &["DOMINICAN REPUBLIC (THE)"], 2),
    c("DZD", 12, "Algerian Dinar", &["ALGERIA"], 2),
    c("EGP", 818, "Egyptian Pound", &["EGYPT"], 2),
    c("ERN", 232, "Nakfa", &["ERITREA"], 2),
    c("ETB", 230, "Ethiopian Birr", &["ETHIOPIA"], 2),
    c("EUR", 978, "Euro", &["ÅLAND ISLANDS", "ANDORRA", "AUSTRIA", "BELGIUM", "CROATIA", "CYPRUS", "ESTONIA", "EUROPEAN UNION", "FINLAND", "FRANCE", "FRENCH GUIANA", "FRENCH SOUTHERN TERRITORIES (THE)", "GERMANY", "GREECE", "GUADELOUPE", "HOLY SEE (THE)", "IRELAND", "ITALY", "LATVIA", "LITHUANIA", "LUXEMBOURG", "MALTA", "MARTINIQUE", "MAYOTTE", "MONACO", "MONTENEGRO", "NETHERLANDS (THE)", "PORTUGAL", "RÉUNION", "SAINT BARTHÉLEMY", "SAINT MARTIN (FRENCH PART)", "SAINT PIERRE AND MIQUELON", "SAN MARINO", "SLOVAKIA", "SLOVENIA", "SPAIN"], 2),
    c("FJD", 242, "Fiji Dollar", &["FIJI"], 2),
    c("FKP", 238, "Falkland Islands Pound", &["FALKLAND ISLANDS (THE) [MALVINAS]"], 2),
    c("GBP", 826, "Pound Sterling", &["GUERNSEY", "ISLE OF MAN", "JERSEY", "UNITED KINGDOM OF GREAT BRITAIN AND NORTHERN IRELAND (THE)"], 2),
    c("GEL", 981, "Lari", &["GEORGIA"], 2),
    c("GHS", 936, "Ghana Cedi", &["GHANA"], 2),
    c("GIP", 292, "Gibraltar Pound", &["GIBRALTAR"], 2),
    c("GMD", 270, "Dalasi", &["GAMBIA (THE)"], 2),
    c("GNF", 324, "Guinean Franc", &["GUINEA"], 0),
    c("GTQ", 320, "Quetzal", &["GUATEMALA"], 2),
    c("GYD", 328, "Guyana Dollar", &["GUYANA"], 2),
    c("HKD", 344, "Hong Kong Dollar", &["HONG KONG"], 2),
    c("HNL", 340, "Lempira", &["HONDURAS"], 2),
    c("HTG", 332, "Gourde", &["HAITI"], 2),
    c("HUF", 348, "Forint", &["HUNGARY"], 2),
    c("IDR", 360, "Rupiah", &["INDONESIA"], 2),
    c("ILS", 376, "New Israeli Sheqel", &["ISRAEL"], 2),
    c("INR", 356, "Indian Rupee", &["BHUTAN", "INDIA"], 2),
    c("IQD", 368, "Iraqi Dinar", &["IRAQ"], 3),
    c("IRR", 364, "Iranian Rial", &["IRAN (ISLAMIC REPUBLIC OF)"], 2),
    c("ISK", 352, "Iceland Krona", &["ICELAND"], 0),
    c("JMD", 388, "Jamaican Dollar", &["JAMAICA"], 2),
    c("JOD", 400, "Jordanian Dinar", &["JORDAN"], 3),
    c("JPY", 392, "Yen", &["JAPAN"], 0),
    c("KES", 404, "Kenyan Shilling", &["KENYA"], 2),
    c("KGS", 417, "Som", &["KYRGYZSTAN"], 2),
    c("KHR", 116, "Riel", &["CAMBODIA"], 2),
    c("KMF", 174, "Comorian Franc", &["COMOROS (THE)"], 0),
    c("KPW", 408, "North Korean Won", &["KOREA (THE DEMOCRATIC PEOPLE’S REPUBLIC OF)"], 2),
    c("KRW", 410, "Won", &["KOREA (THE REPUBLIC OF)"], 0),
    c("KWD", 414, "Kuwaiti Dinar", &["KUWAIT"], 3),
    c("KYD", 136, "Cayman Islands Dollar", &["CAYMAN ISLANDS (THE)"], 2),
    c("KZT", 398, "Tenge", &["KAZAKHSTAN"], 2),
    c("LAK", 418, "Lao Kip", &["LAO PEOPLE’S DEMOCRATIC REPUBLIC (THE)"], 2),
    c("LBP", 422, "Lebanese Pound", &["LEBANON"], 2),
    c("LKR", 144, "Sri Lanka Rupee", &["SRI LANKA"], 2),
    c("LRD", 430, "Liberian Dollar", &["LIBERIA"], 2),
    c("LSL", 426, "Loti", &["LESOTHO"], 2),
    c("LYD", 434, "Libyan Dinar", &["LIBYA"], 3),
    c("MAD", 504, "Moroccan Dirham", &["MOROCCO", "WESTERN SAHARA"], 2),
    c("MDL", 498, "Moldovan Leu", &["MOLDOVA (THE REPUBLIC OF)"], 2),
    c("MGA", 969, "Malagasy Ariary", &["MADAGASCAR"], 2),
    c("MKD", 807, "Denar", &["NORTH MACEDONIA"], 2),
    c("MMK", 104, "Kyat", &["MYANMAR"], 2),
    c("MNT", 496, "Tugrik", &["MONGOLIA"], 2),
    c("MOP", 446, "Pataca", &["MACAO"], 2),
    c("MRU", 929, "Ouguiya", &["MAURITANIA"], 2),
    c("MUR", 480, "Mauritius Rupee", &["MAURITIUS"], 2),
    c("MVR", 462, "Rufiyaa", &["MALDIVES"], 2),
    c("MWK", 454, "Malawi Kwacha", &["MALAWI"], 2),
    c("MXN", 484, "Mexican Peso", &["MEXICO"], 2),
    c("MXV", 979, "Mexican Unidad de Inversion (UDI)", &["MEXICO"], 2),
    c("MYR", 458, "Malaysian Ringgit", &["MALAYSIA"], 2),
    c("MZN", 943, "Mozambique Metical", &["MOZAMBIQUE"], 2),
    c("NAD", 516, "Namibia Dollar", &["NAMIBIA"], 2),
    c("NGN", 566, "Naira", &["NIGERIA"], 2),
    c("NIO", 558, "Cordoba Oro", &["NICARAGUA"], 2),
    c("NOK", 578, "Norwegian Krone", &["BOUVET ISLAND", "NORWAY", "SVALBARD AND JAN MAYEN"], 2),
    c("NPR", 524, "Nepalese Rupee", &["NEPAL"], 2),
    c("NZD", 554, "New Zealand Dollar", &["COOK ISLANDS (THE)", "NEW ZEALAND", "NIUE", "PITCAIRN", "TOKELAU"], 2),
    c("OMR", 512, "Rial Omani", &["OMAN"], 3),
    c("PAB", 590, "Balboa", &["PANAMA"], 2),
    c("PEN", 604, "Sol", &["PERU"], 2),
    c("PGK", 598, "Kina", &["PAPUA NEW GUINEA"], 2),
    c("PHP", 608, "Philippine Peso", &["PHILIPPINES (THE)"], 2),
    c("PKR", 586, "Pakistan Rupee", &["PAKISTAN"], 2),
    c("PLN", 985, "Zloty", &["POLAND"], 2),
    c("PYG", 600, "Guarani", &["PARAGUAY"], 0),
    c("QAR", 634, "Qatari Rial", &["QATAR"], 2),
    c("RON", 946, "Romanian Leu", &["ROMANIA"], 2),
    c("RSD", 941, "Serbian Dinar", &["SERBIA"], 2),
    c("RUB", 643, "Russian Ruble", &["RUSSIAN FEDERATION (THE)"], 2),
    c("RWF", 646, "Rwanda Franc", &["RWANDA"], 0),
    c("SAR", 682, "Saudi Riyal", &["SAUDI ARABIA"], 2),
    c("SBD", 90, "Solomon Islands Dollar", &["SOLOMON ISLANDS"], 2),
    c("SCR", 690, "Seychelles Rupee", &["SEYCHELLES"], 2),
    c("SDG", 938, "Sudanese Pound", &["SUDAN (THE)"], 2),
    c("SEK", 752, "Swedish Krona", &["SWEDEN"], 2),
    c("SGD", 702, "Singapore Dollar", &["SINGAPORE"], 2),
    c("SHP", 654, "Saint Helena Pound", &["SAINT HELENA, ASCENSION AND TRISTAN DA CUNHA"], 2),
    c("SLE", 925, "Leone", &["SIERRA LEONE"], 2),
    c("SOS", 706, "Somali Shilling", &["SOMALIA"], 2),
    c("SRD", 968, "Surinam Dollar", &["SURINAME"], 2),
    c("SSP", 728, "South Sudanese Pound", &["SOUTH SUDAN"], 2),
    c("STN", 930, "Dobra", &["SAO TOME AND PRINCIPE"], 2),
    c("SVC", 222, "El Salvador Colon", &["EL SALVADOR"], 2),
    c("SYP", 760, "Syrian Pound", &["SYRIAN ARAB REPUBLIC"], 2),
    c("SZL", 748, "Lilangeni", &["ESWATINI"], 2),
    c("THB", 764, "Baht", &["THAILAND"], 2),
    c("TJS", 972, "Somoni", &["TAJIKISTAN"], 2),
    c("TMT", 934, "Turkmenistan New Manat", &["TURKMENISTAN"], 2),
    c("TND", 788, "Tunisian Dinar", &["TUNISIA"], 3),
    c("TOP", 776, "Pa’anga", &["TONGA"], 2),
    c("TRY", 949, "Turkish Lira", &["TÜRKİYE"], 2),
    c("TTD", 780, "Trinidad and Tobago Dollar", &["TRINIDAD AND TOBAGO"], 2),
    c("TWD", 901, "New Taiwan Dollar", &["TAIWAN (PROVINCE OF CHINA)"], 2),
    c("TZS", 834, "Tanzanian Shilling", &["TANZANIA, UNITED REPUBLIC OF"], 2),
    c("UAH", 980, "Hryvnia", &["UKRAINE"], 2),
    c("UGX", 800, "Uganda Shilling", &["UGANDA"], 0),
    c("USD", 840, "US Dollar", &["AMERICAN SAMOA", "BONAIRE, SINT EUSTATIUS AND SABA", "BRITISH INDIAN OCEAN TERRITORY (THE)", "ECUADOR", "EL SALVADOR", "GUAM", "HAITI", "MARSHALL ISLANDS (THE)", "MICRONESIA (FEDERATED STATES OF)", "NORTHERN MARIANA ISLANDS (THE)", "PALAU", "PANAMA", "PUERTO RICO", "TIMOR-LESTE", "TURKS AND CAICOS ISLANDS (THE)", "UNITED STATES MINOR OUTLYING ISLANDS (THE)", "UNITED STATES OF AMERICA (THE)", "VIRGIN ISLANDS (BRITISH)", "VIRGIN ISLANDS (U.S.)"], 2),
    c("USN", 997, "US Dollar (Next day)", &["UNITED STATES OF AMERICA (THE)"], 2),
    c("UYI", 940, "Uruguay Peso en Unidades Indexadas (UI)", &["URUGUAY"], 0),
    c("UYU", 858, "Peso Uruguayo", &["URUGUAY"], 2),
    c("UYW", 927, "Unidad Previsional", &["URUGUAY"], 4),
    c("UZS", 860, "Uzbekistan Sum", &["UZBEKISTAN"], 2),
    c("VED", 926, "Bolívar Soberano", &["VENEZUELA (BOLIVARIAN REPUBLIC OF)"], 2),
    c("VES", 928, "Bolívar Soberano", &["VENEZUELA (BOLIVARIAN REPUBLIC OF)"], 2),
    c("VND", 704, "Dong", &["VIET NAM"], 0),
    c("VUV", 548, "Vatu", &["VANUATU"], 0),
    c("WST", 882, "Tala", &["SAMOA"], 2),
    c("XAF", 950, "CFA Franc BEAC", &["CAMEROON", "CENTRAL AFRICAN REPUBLIC (THE)", "CHAD", "CONGO (THE)", "EQUATORIAL GUINEA", "GABON"], 0),
    c("XAG", 961, "Silver", &["ZZ11_Silver"], 0),
    c("XAU", 959, "Gold", &["ZZ08_Gold"], 0),
    c("XBA", 955, "Bond Markets Unit European Composite Unit (EURCO)", &["ZZ01_Bond Markets Unit European_EURCO"], 0),
    c("XBB", 956, "Bond Markets Unit European Monetary Unit (E.M.U.-6)", &["ZZ02_Bond Markets Unit European_EMU-6"], 0),
    c("XBC", 957, "Bond Markets Unit European Unit of Account 9 (E.U.A.-9)", &["ZZ03_Bond Markets Unit European_EUA-9"], 0),
    c("XBD", 958, "Bond Markets Unit European Unit of Account 17 (E.U.A.-17)", &["ZZ04_Bond Markets Unit European_EUA-17"], 0),
    c("XCD", 951, "East Caribbean Dollar", &["ANGUILLA", "ANTIGUA AND BARBUDA", "DOMINICA", "GRENADA", "MONTSERRAT", "SAINT KITTS AND NEVIS", "SAINT LUCIA", "SAINT VINCENT AND THE GRENADINES"], 2),
    c("XDR", 960, "SDR (Special Drawing Right)", &["INTERNATIONAL MONETARY FUND (IMF)"], 0),
    c("XOF", 952, "CFA Franc BCEAO", &["BENIN", "BURKINA FASO", "CÔTE D'IVOIRE", "GUINEA-BISSAU", "MALI", "NIGER (THE)", "SENEGAL", "TOGO"], 0),
    c("XPD", 964, "Palladium", &["ZZ09_Palladium"], 0),
    c("XPF", 953, "CFP Franc", &["FRENCH POLYNESIA", "NEW CALEDONIA", "WALLIS AND FUTUNA"], 0),
    c("XPT", 962, "Platinum", &["ZZ10_Platinum"], 0),
    c("XSU", 994, "Sucre", &["SISTEMA UNITARIO DE COMPENSACION REGIONAL DE PAGOS \"SUCRE\""], 0),
    c("XTS", 963, "Codes specifically reserved for testing purposes", &["ZZ06_Testing_Code"], 0),
    c("XUA", 965, "ADB Unit of Account", &["MEMBER COUNTRIES OF THE AFRICAN DEVELOPMENT BANK GROUP"], 0),
    c("XXX", 999, "The codes assigned for transactions where no currency is involved", &["ZZ07_No_Currency"], 0),
    c("YER", 886, "Yemeni Rial", &["YEMEN"], 2),
    c("ZAR", 710, "Rand", &["LESOTHO", "NAMIBIA", "SOUTH AFRICA"], 2),
    c("ZMW", 967, "Zambian Kwacha", &["ZAMBIA"], 2),
    c("ZWG", 924, "Zimbabwe Gold", &["ZIMBABWE"], 2),
    c("ZWL", 932, "Zimbabwe Dollar", &["ZIMBABWE"], 2),
];
