//! Static airport catalog.

use super::AirportRecord;

macro_rules! airport {
    ($code:literal, $city:literal, $country:literal, $name:literal) => {
        AirportRecord {
            code: $code,
            city: $city,
            country: $country,
            name: $name,
        }
    };
}

pub static AIRPORTS: &[AirportRecord] = &[
    // North America
    airport!("ATL", "Atlanta", "United States", "Hartsfield-Jackson Atlanta International"),
    airport!("BOS", "Boston", "United States", "Logan International"),
    airport!("CLT", "Charlotte", "United States", "Charlotte Douglas International"),
    airport!("DEN", "Denver", "United States", "Denver International"),
    airport!("DFW", "Dallas", "United States", "Dallas/Fort Worth International"),
    airport!("DTW", "Detroit", "United States", "Detroit Metropolitan Wayne County"),
    airport!("EWR", "Newark", "United States", "Newark Liberty International (New York)"),
    airport!("HNL", "Honolulu", "United States", "Daniel K. Inouye International"),
    airport!("IAD", "Washington", "United States", "Washington Dulles International"),
    airport!("IAH", "Houston", "United States", "George Bush Intercontinental"),
    airport!("JFK", "New York", "United States", "John F. Kennedy International"),
    airport!("LAS", "Las Vegas", "United States", "Harry Reid International"),
    airport!("LAX", "Los Angeles", "United States", "Los Angeles International"),
    airport!("LGA", "New York", "United States", "LaGuardia"),
    airport!("MCO", "Orlando", "United States", "Orlando International"),
    airport!("MIA", "Miami", "United States", "Miami International"),
    airport!("MSP", "Minneapolis", "United States", "Minneapolis-Saint Paul International"),
    airport!("ORD", "Chicago", "United States", "O'Hare International"),
    airport!("PDX", "Portland", "United States", "Portland International"),
    airport!("PHL", "Philadelphia", "United States", "Philadelphia International"),
    airport!("PHX", "Phoenix", "United States", "Phoenix Sky Harbor International"),
    airport!("SAN", "San Diego", "United States", "San Diego International"),
    airport!("SEA", "Seattle", "United States", "Seattle-Tacoma International"),
    airport!("SFO", "San Francisco", "United States", "San Francisco International"),
    airport!("SJC", "San Jose", "United States", "Norman Y. Mineta San Jose International"),
    airport!("SLC", "Salt Lake City", "United States", "Salt Lake City International"),
    airport!("YUL", "Montreal", "Canada", "Montréal-Trudeau International"),
    airport!("YVR", "Vancouver", "Canada", "Vancouver International"),
    airport!("YYZ", "Toronto", "Canada", "Toronto Pearson International"),
    airport!("MEX", "Mexico City", "Mexico", "Benito Juárez International"),
    airport!("CUN", "Cancún", "Mexico", "Cancún International"),
    // Europe
    airport!("AMS", "Amsterdam", "Netherlands", "Schiphol"),
    airport!("BCN", "Barcelona", "Spain", "Josep Tarradellas Barcelona-El Prat"),
    airport!("CDG", "Paris", "France", "Charles de Gaulle"),
    airport!("CPH", "Copenhagen", "Denmark", "Copenhagen Kastrup"),
    airport!("DUB", "Dublin", "Ireland", "Dublin"),
    airport!("FCO", "Rome", "Italy", "Leonardo da Vinci–Fiumicino"),
    airport!("FRA", "Frankfurt", "Germany", "Frankfurt am Main"),
    airport!("IST", "Istanbul", "Turkey", "Istanbul"),
    airport!("LGW", "London", "United Kingdom", "Gatwick"),
    airport!("LHR", "London", "United Kingdom", "Heathrow"),
    airport!("LIS", "Lisbon", "Portugal", "Humberto Delgado"),
    airport!("MAD", "Madrid", "Spain", "Adolfo Suárez Madrid–Barajas"),
    airport!("MUC", "Munich", "Germany", "Munich"),
    airport!("ORY", "Paris", "France", "Orly"),
    airport!("ZRH", "Zurich", "Switzerland", "Zurich"),
    // Middle East & Africa
    airport!("DOH", "Doha", "Qatar", "Hamad International"),
    airport!("DXB", "Dubai", "United Arab Emirates", "Dubai International"),
    airport!("JNB", "Johannesburg", "South Africa", "O. R. Tambo International"),
    airport!("CAI", "Cairo", "Egypt", "Cairo International"),
    // Asia-Pacific
    airport!("BKK", "Bangkok", "Thailand", "Suvarnabhumi"),
    airport!("DEL", "Delhi", "India", "Indira Gandhi International"),
    airport!("BOM", "Mumbai", "India", "Chhatrapati Shivaji Maharaj International"),
    airport!("HKG", "Hong Kong", "Hong Kong", "Hong Kong International"),
    airport!("HND", "Tokyo", "Japan", "Haneda"),
    airport!("NRT", "Tokyo", "Japan", "Narita International"),
    airport!("ICN", "Seoul", "South Korea", "Incheon International"),
    airport!("PEK", "Beijing", "China", "Beijing Capital International"),
    airport!("PVG", "Shanghai", "China", "Shanghai Pudong International"),
    airport!("SIN", "Singapore", "Singapore", "Changi"),
    airport!("SYD", "Sydney", "Australia", "Kingsford Smith"),
    airport!("MEL", "Melbourne", "Australia", "Melbourne Tullamarine"),
    airport!("AKL", "Auckland", "New Zealand", "Auckland"),
    // South America
    airport!("GRU", "São Paulo", "Brazil", "Guarulhos International"),
    airport!("EZE", "Buenos Aires", "Argentina", "Ministro Pistarini International"),
    airport!("BOG", "Bogotá", "Colombia", "El Dorado International"),
    airport!("LIM", "Lima", "Peru", "Jorge Chávez International"),
    airport!("SCL", "Santiago", "Chile", "Arturo Merino Benítez International"),
];
