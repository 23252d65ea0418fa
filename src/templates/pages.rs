// Lightweight UI served from the backend as a fallback while the
// frontend is unavailable.
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = "
  body{font-family:system-ui,-apple-system,Segoe UI,Roboto,Arial,sans-serif;background:linear-gradient(135deg,#e0f2fe,#e0e7ff);margin:0;padding:0}
  .container{max-width:1100px;margin:0 auto;padding:24px}
  .card{background:#fff;border-radius:12px;box-shadow:0 1px 6px rgba(0,0,0,.08);padding:16px}
  .row{display:grid;grid-template-columns:1fr 160px auto;gap:12px;align-items:end}
  label{display:block;font-size:14px;font-weight:600;color:#374151}
  input[type=text],input[type=number]{margin-top:6px;width:100%;border:1px solid #d1d5db;border-radius:8px;padding:8px 10px}
  .btn{border:0;border-radius:8px;color:#fff;padding:8px 14px;font-weight:600;cursor:pointer}
  .btn-primary{background:#4f46e5}
  .btn-success{background:#059669}
  .muted{color:#6b7280}
  table{width:100%;border-collapse:collapse;font-size:14px}
  thead{background:#f9fafb}
  th,td{text-align:left;padding:10px 12px}
  tbody tr{border-top:1px solid #f3f4f6}
  .error{margin-top:12px;padding:10px;border-radius:8px;background:#fee2e2;color:#991b1b;border:1px solid #fecaca}
";

const SCRIPT: &str = r#"
  const API = ''
  const county = 'Denton County, TX'
  const $ = (id) => document.getElementById(id)
  const fmtUSD = (n) => (n != null ? Number(n).toLocaleString('en-US', { style: 'currency', currency: 'USD' }) : '-')

  function setError(msg){
    const el = $('error');
    if(!msg){ el.style.display='none'; el.textContent=''; return }
    el.style.display='block'; el.textContent = msg
  }
  function renderRows(rows){
    const tbody = $('tbody');
    tbody.innerHTML = ''
    if(!rows.length){
      const tr = document.createElement('tr');
      tr.innerHTML = `<td colspan="10" class="muted" style="text-align:center;padding:32px 12px">No results found.</td>`
      tbody.appendChild(tr)
      $('count').textContent = ''
      return
    }
    $('count').textContent = `(${rows.length})`
    for(const r of rows){
      const tr = document.createElement('tr')
      tr.innerHTML = `
        <td>${r.parcel_id ?? '-'}</td>
        <td>${r.address ?? '-'}</td>
        <td>${r.owner ?? '-'}</td>
        <td>${fmtUSD(r.total_appraised_value)}</td>
        <td>${fmtUSD(r.land_value)}</td>
        <td>${fmtUSD(r.improvement_value)}</td>
        <td>${r.year_built ?? '-'}</td>
        <td>${r.lot_size ?? '-'}</td>
        <td>${r.property_class ?? '-'}</td>
        <td>${r.land_use ?? '-'}</td>
      `
      tbody.appendChild(tr)
    }
  }

  function searchBody(){
    const address = $('address').value.trim()
    const radius = parseFloat($('radius').value)
    const sf = $('sf').checked
    if(!address){ return null }
    return JSON.stringify({ address, county, radius_miles: radius, single_family_only: sf })
  }

  $('searchBtn').addEventListener('click', async (e) => {
    e.preventDefault()
    setError('')
    const body = searchBody()
    if(!body){ setError('Please enter an address.'); return }
    try{
      const res = await fetch(`${API}/api/properties/search`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body
      })
      if(!res.ok){
        const data = await res.json().catch(()=>({}))
        throw new Error(data.detail || `Request failed (${res.status})`)
      }
      const data = await res.json()
      renderRows(data)
    }catch(err){
      setError(err.message || 'Something went wrong')
    }
  })

  $('exportBtn').addEventListener('click', async (e) => {
    e.preventDefault()
    setError('')
    const body = searchBody()
    if(!body){ setError('Please enter an address before exporting.'); return }
    try{
      const res = await fetch(`${API}/api/properties/export`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body
      })
      if(!res.ok){
        const data = await res.json().catch(()=>({}))
        throw new Error(data.detail || `Export failed (${res.status})`)
      }
      const blob = await res.blob()
      const url = URL.createObjectURL(blob)
      const a = document.createElement('a')
      a.href = url
      a.download = 'denton_properties.xlsx'
      document.body.appendChild(a)
      a.click()
      a.remove()
      URL.revokeObjectURL(url)
    }catch(err){
      setError(err.message || 'Failed to download file')
    }
  })
"#;

pub fn search_page() -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Denton County Property Finder" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="container" {
                    h1 style="font-size:28px;font-weight:800;color:#1f2937;margin:0 0 8px" {
                        "Denton County Property Finder"
                    }
                    p class="muted" style="margin-top:0" {
                        "Enter an address and get nearby single-family homes with current appraisal values. Download as Excel in one click."
                    }

                    div class="card" {
                        div class="row" {
                            div {
                                label { "Address" }
                                input id="address" type="text" placeholder="123 Main St, Denton, TX";
                            }
                            div {
                                label { "Radius (miles)" }
                                input id="radius" type="number" min="0.1" step="0.1" value="2";
                            }
                            div style="display:flex;align-items:center;gap:8px" {
                                input id="sf" type="checkbox" checked;
                                label for="sf" { "Single-family only" }
                            }
                        }
                        div style="margin-top:12px;display:flex;gap:12px" {
                            button class="btn btn-primary" id="searchBtn" { "Search" }
                            button class="btn btn-success" id="exportBtn" { "Download Excel" }
                        }
                        div id="error" class="error" style="display:none" {}
                    }

                    div class="card" style="margin-top:20px;overflow:auto" {
                        div style="padding-bottom:8px;border-bottom:1px solid #f3f4f6;display:flex;justify-content:space-between;align-items:center" {
                            h2 style="margin:0;font-weight:700;color:#1f2937" {
                                "Results " span id="count" class="muted" {}
                            }
                        }
                        div style="overflow-x:auto" {
                            table {
                                thead {
                                    tr {
                                        th { "Parcel ID" }
                                        th { "Address" }
                                        th { "Owner" }
                                        th { "Total Value" }
                                        th { "Land Value" }
                                        th { "Impr. Value" }
                                        th { "Year Built" }
                                        th { "Lot Size" }
                                        th { "Class" }
                                        th { "Land Use" }
                                    }
                                }
                                tbody id="tbody" {
                                    tr id="empty" {
                                        td colspan="10" class="muted" style="text-align:center;padding:32px 12px" {
                                            "No results yet. Run a search above."
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
}
