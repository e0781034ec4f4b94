#![allow(dead_code)]

use std::fs;
use std::path::Path;

use recommender::constants::files;

pub const USERS: &str = "\
userID,latitude,smoker,drink_level,dress_preference,ambience,transport,marital_status,hijos,interest,personality,activity,budget
U1003,22.13,false,abstemious,informal,family,on foot,single,independent,variety,thrifty-protector,student,medium
U1001,22.14,true,social drinker,formal,friends,public,married,kids,technology,hunter-ostentatious,professional,low
U1002,22.15,?,casual drinker,no preference,solitary,car owner,widow,dependent,none,hard-worker,unemployed,high
U1005,18.87,false,social drinker,elegant,family,public,single,independent,retro,conformist,working-class,?
U1004,18.91,true,abstemious,informal,friends,car owner,married,kids,eco-friendly,thrifty-protector,student,low
U1010,23.75,false,casual drinker,formal,solitary,on foot,single,dependent,variety,hard-worker,professional,high
";

pub const RESTAURANTS: &str = "\
placeID,latitude,name,alcohol,smoking_area,dress_code,accessibility,price,Rambience,franchise,area,other_services
135085,22.15,Tortas Locas Hipocampo,No_Alcohol_Served,none,informal,no_accessibility,medium,familiar,f,closed,none
132825,22.14,puesto de tacos,No_Alcohol_Served,none,informal,completely,low,familiar,f,open,none
135032,22.15,Cafeteria y Restaurant El Pacifico,Wine-Beer,only at bar,casual,partially,high,quiet,t,closed,Internet
132951,22.14,VIPS,Full_Bar,permitted,formal,completely,medium,?,t,closed,variety
134999,18.92,Kiku Cuernavaca,Wine-Beer,section,casual,no_accessibility,high,quiet,f,open,Internet
";

pub const RATINGS: &str = "\
userID,placeID,rating,food_rating,service_rating
U1001,135085,2,2,2
U1001,132825,1,2,1
U1001,134999,0,1,0
U1002,135032,2,2,1
U1002,132951,1,1,1
U1002,135085,0,0,0
U1003,132825,2,2,2
U1003,134999,1,1,2
U1003,132951,2,1,2
U1004,135085,1,1,1
U1004,135032,0,0,1
U1004,132825,2,2,2
U1005,134999,2,2,2
U1005,132951,0,1,0
U1005,135032,1,1,1
U1010,135085,2,1,2
U1010,132825,0,0,0
U1010,134999,1,2,1
U1010,135032,2,2,2
U1003,135085,1,1,1
";

pub const CUISINES: &str = "\
placeID,Rcuisine
135085,Fast_Food
135085,Mexican
132825,Mexican
135032,Cafeteria
134999,Japanese
";

/// Write every fixture table into `dir` under the default file names
pub fn write_data_dir(dir: &Path) {
    fs::write(dir.join(files::USERS), USERS).unwrap();
    fs::write(dir.join(files::RESTAURANTS), RESTAURANTS).unwrap();
    fs::write(dir.join(files::RATINGS), RATINGS).unwrap();
    fs::write(dir.join(files::CUISINES), CUISINES).unwrap();
}
