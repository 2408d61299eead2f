// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Shared fixtures for unit tests.

use std::io::Write;

use tempfile::NamedTempFile;

pub const HEADER: &str = "Administrative,Administrative_Duration,Informational,Informational_Duration,ProductRelated,ProductRelated_Duration,BounceRates,ExitRates,PageValues,SpecialDay,Month,OperatingSystems,Browser,Region,TrafficType,VisitorType,Weekend,Revenue";

/// Ten sessions, four of which end in a purchase.
pub const SESSIONS: [&str; 10] = [
    "0,0,0,0,1,0,0.2,0.2,0,0,Feb,1,1,1,1,Returning_Visitor,FALSE,FALSE",
    "0,0,0,0,2,64,0,0.1,0,0,Feb,2,2,1,2,Returning_Visitor,FALSE,FALSE",
    "3,142.5,0,0,48,1052.255952,0.004347826,0.013043478,67.29407,0,Nov,2,2,3,2,Returning_Visitor,TRUE,TRUE",
    "0,0,0,0,10,627.5,0.02,0.05,0,0,Mar,3,3,1,4,Returning_Visitor,TRUE,FALSE",
    "2,53,0,0,33,1006.75,0,0.008333333,29.93432,0,June,2,2,1,8,New_Visitor,FALSE,TRUE",
    "1,6,1,0,25,2341.3,0,0.009375,0,0.4,May,1,1,1,3,Returning_Visitor,FALSE,FALSE",
    "5,120.8,2,43.5,65,2914.69,0.001315789,0.012175439,45.70224,0,Dec,2,2,6,1,Returning_Visitor,FALSE,TRUE",
    "0,0,0,0,3,395,0,0.066666667,0,0,Oct,4,1,9,3,Other,TRUE,FALSE",
    "4,75,1,12,41,1480.2,0.002,0.01,52.13,0,Sep,2,5,2,2,New_Visitor,TRUE,TRUE",
    "0,0,0,0,6,142,0.033333333,0.066666667,0,0.8,May,2,2,4,1,Returning_Visitor,FALSE,FALSE",
];

pub fn sessions_csv() -> String {
    let mut content = format!("{HEADER}\n");
    for line in SESSIONS {
        content.push_str(line);
        content.push('\n');
    }
    content
}

pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
